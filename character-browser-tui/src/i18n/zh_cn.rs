//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "角色浏览器",
        loading: "加载中...",
        error: "错误",
    },

    hints: HintTexts {
        select: "选择",
        open: "详情",
        next_page: "下一页",
        help: "帮助",
        quit: "退出",
        close: "关闭",
    },

    list: ListTexts {
        title: "角色列表",
        page: "页码",
        of: "/",
        empty: "本页没有角色",
    },

    detail: DetailTexts {
        title: "角色详情",
        id: "ID",
        name: "名称",
        image: "图片",
        not_found: "未找到角色",
    },

    help: HelpTexts {
        title: "帮助",
        shortcuts: "快捷键",
        move_up_down: "上下移动",
        first_last: "第一项/最后一项",
        open: "查看详情",
        next_page: "下一页",
        help: "显示/关闭帮助",
        quit: "退出",
        close_hint: "按 Esc 关闭帮助",
    },

    status: StatusTexts {
        loaded: "已加载",
        failed: "请求失败",
    },
};
