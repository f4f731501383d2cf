//! Selector groups the style rules write to.

pub const NAVIGATION: &[&str] = &[".main-navigation"];

pub const BODY: &[&str] = &["body"];

pub const BORDERED: &[&str] = &["#page", ".bypostauthor .comment-footer"];

pub const PROGRESS_BAR: &[&str] = &[".pace .pace-progress"];

pub const LINKS_AND_HIGHLIGHTS: &[&str] = &[
    "a",
    ".main-navigation .menu > .highlight > a",
    ".main-navigation .menu > .highlight.current-menu-item > a",
    ".main-navigation .menu > .highlight > a:before",
    ".main-navigation ul ul li.highlight a",
    ".main-navigation ul ul .highlight a:before",
    ".comment-full:hover > .reply > .comment-reply-link",
    ".site-main .comment-navigation a:hover",
    ".site-main .paging-navigation a:hover",
];

pub const BUTTONS_AND_CONTROLS: &[&str] = &[
    "button",
    "input[type=\"submit\"]",
    "input[type=\"submit\"]:hover",
    "input[type=\"button\"]",
    "input[type=\"button\"]:hover",
    ".more-link",
    ".menu-toggle",
    ".main-navigation ul ul .highlight a",
    ".main-navigation ul ul .highlight.current-menu-item a",
    ".main-navigation ul ul .highlight.current-menu-parent > a",
    ".widget_calendar table caption",
];

pub const BUTTON_AND_CONTROL_TEXT: &[&str] = &[
    "button",
    "input[type=\"submit\"]",
    "input[type=\"submit\"]:hover",
    "input[type=\"button\"]",
    "input[type=\"button\"]:hover",
    ".more-link",
    ".menu-toggle",
    ".site-header .main-navigation ul ul .highlight a",
    ".site-header .main-navigation ul ul .highlight.current-menu-item a",
    ".site-header .main-navigation ul ul .highlight.current-menu-parent > a",
    ".widget_calendar table caption",
];

pub const NARROW_NAVIGATION_HIGHLIGHTS: &[&str] = &[
    ".site-header .main-navigation ul ul .highlight a",
    ".site-header .main-navigation .menu > .highlight > a",
];
