//! Demo content for the project modals. The core treats this as an opaque
//! external table; nothing below is load-bearing.

use portfolio_core::{ProjectEntry, ProjectTable};

fn entry(
    title: &str,
    description: &str,
    image: Option<&str>,
    source_url: Option<&str>,
    demo_url: Option<&str>,
    store_url: Option<&str>,
) -> ProjectEntry {
    ProjectEntry {
        title: title.to_owned(),
        description: description.to_owned(),
        image: image.map(str::to_owned),
        source_url: source_url.map(str::to_owned),
        demo_url: demo_url.map(str::to_owned),
        store_url: store_url.map(str::to_owned),
    }
}

pub fn table() -> ProjectTable {
    ProjectTable::from_entries([
        entry(
            "Manus Age",
            "My first complete Unity game, built for a first-year university practicum. \
             Ships with a card-deck editor so you can build your own picture decks.\n\n\
             [Unity] [C#] [2D]",
            Some("img/manus-age.png"),
            None,
            Some("https://koba-fix.itch.io/manus-age"),
            None,
        ),
        entry(
            "Half-Life 2: Freeman Paradox",
            "A Ren'Py visual novel exploring Gordon Freeman's perspective in the \
             Half-Life 2 beta setting. The narrator justifies every player choice, \
             however grim.\n\n[Ren'Py] [Python] [Narrative]",
            Some("img/hl2fp.png"),
            None,
            Some("https://koba-fix.itch.io/hl2fp"),
            None,
        ),
        entry(
            "Garry's Mod Workshop",
            "Map ports and originals: the Hangar map ported from Warface, Alma's \
             Laboratory, a winter rework of rp_downtown, and a scripted medkit for a \
             MilitaryRP server.\n\n[Garry's Mod] [GLua] [Mapping]",
            Some("img/alma.png"),
            None,
            None,
            Some("https://steamcommunity.com/id/fox1741/myworkshopfiles/"),
        ),
        entry(
            "FileTagger",
            "A tag-based file manager backed by a local database: attach tags to \
             files, search and sort by them, and jump straight to the file or its \
             folder.\n\n[C#] [WinForms] [SQL]",
            Some("img/ft.png"),
            None,
            None,
            None,
        ),
        entry(
            "Freezegun",
            "A small puzzle project inspired by Portal 2 and Garry's Mod, built in \
             Unity in about a day. The first finished project of my own.\n\n\
             [Unity] [C#] [Puzzle]",
            Some("img/fg.png"),
            None,
            Some("https://koba-fix.itch.io/freezegun"),
            None,
        ),
        entry(
            "Project Alef",
            "An orbital mechanics simulator, loosely following Aurora 4x in a much \
             lighter form.\n\n[Python] [Tkinter] [Physics]",
            Some("img/pa.png"),
            Some("https://github.com/Fantom1741/project-alef"),
            None,
            None,
        ),
        entry(
            "legacy Projects",
            "Abandoned map ports, a long-standing gunsmith-game idea, and a roleplay \
             map that did not survive contact with reality.\n\n// TOP SECRET //",
            None,
            None,
            None,
            None,
        ),
    ])
}
