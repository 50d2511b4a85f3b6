pub struct Keybinding {
    pub keys: &'static str,
    pub description: &'static str,
}

pub struct KeybindingCategory {
    pub name: &'static str,
    pub bindings: &'static [Keybinding],
}

pub const KEYBINDING_CATEGORIES: &[KeybindingCategory] = &[
    KeybindingCategory {
        name: "Navigation",
        bindings: &[
            Keybinding {
                keys: "j/k",
                description: "Move down/up",
            },
            Keybinding {
                keys: "Tab",
                description: "Switch between assets and favorites",
            },
            Keybinding {
                keys: "Enter",
                description: "Open asset detail",
            },
            Keybinding {
                keys: "Esc",
                description: "Close detail / clear message",
            },
        ],
    },
    KeybindingCategory {
        name: "Favorites",
        bindings: &[
            Keybinding {
                keys: "f / Space",
                description: "Add or remove the selected asset",
            },
            Keybinding {
                keys: "c",
                description: "Refresh favorite count",
            },
        ],
    },
    KeybindingCategory {
        name: "Data",
        bindings: &[
            Keybinding {
                keys: "t",
                description: "Cycle asset type filter (all/tanah/bangunan)",
            },
            Keybinding {
                keys: "r",
                description: "Reload assets and favorites",
            },
        ],
    },
    KeybindingCategory {
        name: "Other",
        bindings: &[
            Keybinding {
                keys: "?",
                description: "Show this help",
            },
            Keybinding {
                keys: "D",
                description: "Toggle debug log",
            },
            Keybinding {
                keys: "q / Ctrl+c",
                description: "Quit",
            },
        ],
    },
];

/// Number of lines the help panel renders.
pub fn help_content_height() -> usize {
    let mut count = 2; // Title + empty line
    for category in KEYBINDING_CATEGORIES {
        count += 1; // Category name
        count += category.bindings.len();
        count += 1; // Empty line after category
    }
    count
}
