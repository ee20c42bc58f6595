//! Text rendering of a [`World`], optionally with a route overlaid.

use crate::geom::Coord;
use crate::terrain::Terrain;
use crate::world::World;

/// The glyph drawn for each cell role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet {
    pub free: &'static str,
    pub building: &'static str,
    pub water: &'static str,
    pub blocked: &'static str,
    pub start: &'static str,
    pub goal: &'static str,
    pub path: &'static str,
}

impl SymbolSet {
    /// Emoji glyphs, two columns wide in most terminals.
    pub const EMOJI: Self = Self {
        free: "⬜",
        building: "🏢",
        water: "💧",
        blocked: "⛔",
        start: "🚦",
        goal: "🏁",
        path: "⭐",
    };

    /// Plain single-byte glyphs.
    pub const ASCII: Self = Self {
        free: ".",
        building: "B",
        water: "~",
        blocked: "#",
        start: "S",
        goal: "G",
        path: "*",
    };

    /// Glyph for a terrain tag.
    pub const fn terrain(&self, t: Terrain) -> &'static str {
        match t {
            Terrain::Free => self.free,
            Terrain::Building => self.building,
            Terrain::Water => self.water,
            Terrain::Blocked => self.blocked,
        }
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::EMOJI
    }
}

/// Render `world` one glyph per cell, rows separated by `\n`.
///
/// Goal and start glyphs take precedence over the path marker, which takes
/// precedence over terrain. Path coordinates outside the world are ignored.
pub fn render(world: &World, path: Option<&[Coord]>, symbols: &SymbolSet) -> String {
    let bounds = world.bounds();
    let width = world.width() as usize;

    let mut on_path = vec![false; bounds.len()];
    for &c in path.unwrap_or_default() {
        if bounds.contains(c) {
            on_path[c.row as usize * width + c.col as usize] = true;
        }
    }

    let mut lines = Vec::with_capacity(world.height() as usize);
    let mut line = String::new();
    for (i, (pos, terrain)) in world.cells().enumerate() {
        let glyph = if world.goal() == Some(pos) {
            symbols.goal
        } else if world.start() == Some(pos) {
            symbols.start
        } else if on_path[i] {
            symbols.path
        } else {
            symbols.terrain(terrain)
        };
        line.push_str(glyph);
        if pos.col == bounds.max.col - 1 {
            lines.push(std::mem::take(&mut line));
        }
    }
    lines.join("\n")
}
