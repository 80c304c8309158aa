//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, DetailTexts, HelpTexts, HintTexts, ListTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Character Browser",
        loading: "Loading...",
        error: "Error",
    },

    hints: HintTexts {
        select: "Select",
        open: "Details",
        next_page: "Next Page",
        help: "Help",
        quit: "Quit",
        close: "Close",
    },

    list: ListTexts {
        title: "Character List",
        page: "Page",
        of: "of",
        empty: "No characters on this page",
    },

    detail: DetailTexts {
        title: "Character Details",
        id: "ID",
        name: "Name",
        image: "Image",
        not_found: "Character not found",
    },

    help: HelpTexts {
        title: "Help",
        shortcuts: "Shortcuts",
        move_up_down: "Move Up/Down",
        first_last: "First/Last",
        open: "Show details",
        next_page: "Next page",
        help: "Toggle help",
        quit: "Quit",
        close_hint: "Press Esc to close the help",
    },

    status: StatusTexts {
        loaded: "Loaded",
        failed: "Request failed",
    },
};
