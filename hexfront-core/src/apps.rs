//! Flavor label pools - application names per faction and terrain
//!
//! Labels are cosmetic only; they have no gameplay effect.

use crate::cells::{Faction, Terrain};
use rand::Rng;

const OPEN_SOURCE_CODE_EDITORS: &[&str] =
    &["Vim", "Neovim", "Emacs", "Atom", "Brackets", "Code::Blocks"];
const OPEN_SOURCE_TEXT_EDITORS: &[&str] = &["Nano", "Gedit", "Kate", "Geany", "Bluefish"];
const OPEN_SOURCE_BROWSERS: &[&str] =
    &["Firefox", "Brave", "Chromium", "Tor Browser", "LibreWolf"];
const OPEN_SOURCE_OSES: &[&str] =
    &["Linux", "FreeBSD", "OpenBSD", "Debian", "Ubuntu", "Arch Linux"];
const OPEN_SOURCE_DATABASES: &[&str] = &["PostgreSQL", "MySQL", "SQLite", "MariaDB", "MongoDB"];

const BIGTECH_CODE_EDITORS: &[&str] = &["VS Code", "IntelliJ", "Xcode", "Android Studio"];
const BIGTECH_TEXT_EDITORS: &[&str] = &["Notepad++", "Sublime Text", "TextMate"];
const BIGTECH_BROWSERS: &[&str] = &["Chrome", "Edge", "Safari", "Opera"];
const BIGTECH_OSES: &[&str] = &["Windows", "macOS", "iOS", "Android"];
const BIGTECH_DATABASES: &[&str] = &["Oracle", "SQL Server", "DynamoDB", "Cosmos DB"];

fn pool(terrain: Terrain, faction: Faction) -> &'static [&'static str] {
    match (faction, terrain) {
        (Faction::OpenSource, Terrain::CodeEditor) => OPEN_SOURCE_CODE_EDITORS,
        (Faction::OpenSource, Terrain::TextEditor) => OPEN_SOURCE_TEXT_EDITORS,
        (Faction::OpenSource, Terrain::Browser) => OPEN_SOURCE_BROWSERS,
        (Faction::OpenSource, Terrain::Os) => OPEN_SOURCE_OSES,
        (Faction::OpenSource, Terrain::Database) => OPEN_SOURCE_DATABASES,
        (Faction::BigTech, Terrain::CodeEditor) => BIGTECH_CODE_EDITORS,
        (Faction::BigTech, Terrain::TextEditor) => BIGTECH_TEXT_EDITORS,
        (Faction::BigTech, Terrain::Browser) => BIGTECH_BROWSERS,
        (Faction::BigTech, Terrain::Os) => BIGTECH_OSES,
        (Faction::BigTech, Terrain::Database) => BIGTECH_DATABASES,
        _ => &[],
    }
}

/// Pick a random application name for a terrain/faction pair.
///
/// Returns `None` for neutral terrain or the neutral faction.
pub fn app_name<R: Rng>(terrain: Terrain, faction: Faction, rng: &mut R) -> Option<&'static str> {
    let apps = pool(terrain, faction);
    if apps.is_empty() {
        return None;
    }
    Some(apps[rng.gen_range(0..apps.len())])
}
