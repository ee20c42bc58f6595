//! The editing session: one optional world plus a reusable router.

use log::info;
use routecalc_core::{Coord, SymbolSet, Terrain, World, WorldError, render};
use routecalc_paths::{Router, SearchError};

/// Presentation settings for a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Glyphs used when printing maps.
    pub symbols: SymbolSet,
    /// Skip the option list between commands.
    pub quiet: bool,
}

/// A single request against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the world with a new one; invalid sizes fall back to 10x10.
    CreateWorld { height: i32, width: i32 },
    /// Replace the world with a default 10x10 one.
    DefaultWorld,
    SetStart(Coord),
    SetGoal(Coord),
    /// Place an obstacle by menu code (1 building, 2 water, 3 blocked).
    AddObstacle { code: i32, pos: Coord },
    ClearCell(Coord),
    ShowMap,
    FindRoute,
    Quit,
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A world was created. `fallback` holds the rejected size, if any.
    Created {
        height: i32,
        width: i32,
        fallback: Option<WorldError>,
    },
    StartSet(Coord),
    GoalSet(Coord),
    ObstaclePlaced { terrain: Terrain, pos: Coord },
    CellCleared(Coord),
    /// The rendered map.
    Map(String),
    /// A route was found; `map` shows it overlaid.
    Route { cost: i32, map: String },
    NoRoute,
    Quit,
}

/// Why a command was rejected. The session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("create a map first")]
    NoWorld,
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("{0}; set both the start and the goal first")]
    Search(#[from] SearchError),
}

/// Owns the current world between commands.
pub struct Session {
    config: SessionConfig,
    world: Option<World>,
    router: Router,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            world: None,
            router: Router::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn has_world(&self) -> bool {
        self.world.is_some()
    }

    fn world_mut(&mut self) -> Result<&mut World, SessionError> {
        self.world.as_mut().ok_or(SessionError::NoWorld)
    }

    /// Run one command.
    pub fn execute(&mut self, cmd: Command) -> Result<Outcome, SessionError> {
        match cmd {
            Command::CreateWorld { height, width } => {
                let (world, fallback) = World::sized_or_default(height, width);
                Ok(self.replace_world(world, fallback))
            }
            Command::DefaultWorld => Ok(self.replace_world(World::default(), None)),
            Command::SetStart(pos) => {
                self.world_mut()?.set_start(pos)?;
                Ok(Outcome::StartSet(pos))
            }
            Command::SetGoal(pos) => {
                self.world_mut()?.set_goal(pos)?;
                Ok(Outcome::GoalSet(pos))
            }
            Command::AddObstacle { code, pos } => {
                let world = self.world_mut()?;
                let terrain = Terrain::from_code(code)?;
                world.set_terrain(pos, terrain)?;
                Ok(Outcome::ObstaclePlaced { terrain, pos })
            }
            Command::ClearCell(pos) => {
                self.world_mut()?.clear_cell(pos)?;
                Ok(Outcome::CellCleared(pos))
            }
            Command::ShowMap => {
                let world = self.world.as_ref().ok_or(SessionError::NoWorld)?;
                Ok(Outcome::Map(render(world, None, &self.config.symbols)))
            }
            Command::FindRoute => {
                let world = self.world.as_ref().ok_or(SessionError::NoWorld)?;
                match self.router.find_route(world)? {
                    Some(route) => Ok(Outcome::Route {
                        cost: route.cost,
                        map: render(world, Some(&route.path), &self.config.symbols),
                    }),
                    None => Ok(Outcome::NoRoute),
                }
            }
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn replace_world(&mut self, world: World, fallback: Option<WorldError>) -> Outcome {
        let (height, width) = (world.height(), world.width());
        info!("new {height}x{width} world");
        self.world = Some(world);
        Outcome::Created {
            height,
            width,
            fallback,
        }
    }
}
