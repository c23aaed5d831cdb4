//! Command dispatch for one diagram.
//!
//! The session owns the grid model and the renderer. Commands are applied one
//! at a time; only the clipboard copy runs in the background and reports back
//! through a channel.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::sync::mpsc::UnboundedSender;

use crate::config::file::DiagramConfig;
use crate::config::status::DEFAULT_EXPORT_FILE;
use crate::diagram::grid::checked_dimensions;
use crate::diagram::{Cell, Color, GridModel, Outcome, Warning};
use crate::error::DiagramError;
use crate::render::hit_test::is_activation_key;
use crate::render::preview::preview;
use crate::render::{resolve, to_data_uri, to_svg, Activation, Scene, SceneRenderer};
use crate::session::clipboard::Clipboard;
use crate::session::command::{ColorTarget, Command, HELP};
use crate::session::export::save_svg;
use crate::session::status::{Status, StatusBoard};

/// Result of a background clipboard write.
pub type CopyResult = Result<(), DiagramError>;

/// What the front end should show after a command.
#[derive(Debug, Default, PartialEq)]
pub struct Response {
    /// Text to print (preview, JSON, data URI, help).
    pub output: Option<String>,
    pub status: Option<Status>,
    pub quit: bool,
}

impl Response {
    fn status(status: Status) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    fn output(text: String) -> Self {
        Self { output: Some(text), ..Self::default() }
    }
}

pub struct Session {
    model: GridModel,
    renderer: SceneRenderer,
    status: StatusBoard,
    clipboard: Clipboard,
    copy_tx: UnboundedSender<CopyResult>,
    pending_copies: usize,
}

impl Session {
    pub fn new(
        config: &DiagramConfig,
        clipboard: Clipboard,
        copy_tx: UnboundedSender<CopyResult>,
    ) -> Result<Self, DiagramError> {
        config.validate()?;
        let model = GridModel::new(config.width, config.height, config.palette.clone())?;
        info!(
            "[Session] New {}x{} diagram, cell size {}, clipboard {}",
            config.width,
            config.height,
            config.cell_size,
            if clipboard.is_available() { "enabled" } else { "disabled" }
        );
        Ok(Self {
            model,
            renderer: SceneRenderer::new(config.cell_size),
            status: StatusBoard::new(),
            clipboard,
            copy_tx,
            pending_copies: 0,
        })
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn current_status(&self) -> Option<&Status> {
        self.status.current()
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self) -> bool {
        self.status.expire()
    }

    /// Clipboard writes started but not yet reported.
    pub fn pending_copies(&self) -> usize {
        self.pending_copies
    }

    pub fn scene(&mut self) -> Scene {
        self.renderer.render(&self.model)
    }

    pub fn svg(&mut self) -> String {
        to_svg(&self.scene())
    }

    /// Forward a resolved cell to the grid model.
    pub fn activate(&mut self, cell: Cell) -> Outcome {
        self.model.handle_cell_activate(cell)
    }

    /// Apply one command and post its status.
    pub async fn dispatch(&mut self, command: Command) -> Response {
        debug!("[Session] dispatch {:?}", command);
        let response = self.apply(command).await;
        if let Some(status) = &response.status {
            self.status.post(status.clone());
        }
        response
    }

    async fn apply(&mut self, command: Command) -> Response {
        match command {
            Command::Activate { row, col } => {
                Response::status(Status::from(&self.activate(Cell::new(row, col))))
            }
            Command::Click { x, y } => {
                // Off-grid clicks are rejected before a scene is built.
                let hit = match self.renderer.cell_at(&self.model, x, y) {
                    Some(_) => resolve(&self.scene(), &Activation::Pointer { x, y }),
                    None => None,
                };
                match hit {
                    Some(cell) => Response::status(Status::from(&self.activate(cell))),
                    None => Response::status(Status::failure(
                        "MISSED",
                        format!("No square at ({}, {})", x, y),
                    )),
                }
            }
            Command::Key { row, col, key } => {
                let target = Cell::new(row, col);
                let scene = self.scene();
                match resolve(&scene, &Activation::Key { target, key: key.clone() }) {
                    Some(cell) => Response::status(Status::from(&self.activate(cell))),
                    None if is_activation_key(&key) => {
                        Response::status(Status::from(&Outcome::from(Warning::OutOfBounds(target))))
                    }
                    None => {
                        debug!("[Session] Ignored key '{}' on {}", key, target);
                        Response::default()
                    }
                }
            }
            Command::Mode { mode } => {
                self.model.set_mode(mode);
                Response::status(Status::success("MODE", format!("Mode: {}", mode)))
            }
            Command::Size { width, height } => match checked_dimensions(width, height)
                .and_then(|(width, height)| self.model.set_dimensions(width, height))
            {
                Ok(()) => Response::status(Status::success(
                    "RESIZED",
                    format!("Grid resized to {}x{}", width, height),
                )),
                Err(err) => Response::status(Status::from(&err)),
            },
            Command::Reset => {
                self.model.reset();
                Response::status(Status::success("RESET", "Grid reset"))
            }
            Command::Clear => {
                self.model.clear();
                Response::status(Status::success("CLEARED", "Tiles and markers cleared"))
            }
            Command::Color { target, color } => match Color::parse(&color) {
                Ok(color) => {
                    let message = format!("{:?} color set to {}", target, color);
                    match target {
                        ColorTarget::Object => self.model.set_object_color(color),
                        ColorTarget::Stroke => self.model.set_stroke_color(color),
                        ColorTarget::Light => self.model.set_checker_light(color),
                        ColorTarget::Dark => self.model.set_checker_dark(color),
                    }
                    Response::status(Status::success("COLOR", message))
                }
                Err(err) => Response::status(Status::from(&err)),
            },
            Command::Save { path } => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
                match self.save(&path).await {
                    Ok(()) => Response::status(Status::success(
                        "SAVED",
                        format!("SVG saved successfully to {}", path.display()),
                    )),
                    Err(err) => Response::status(Status::failure(
                        err.code(),
                        format!("{}. Use 'uri' or 'copy' to export manually.", err),
                    )),
                }
            }
            Command::Copy => self.start_copy(),
            Command::Uri => Response::output(to_data_uri(&self.svg())),
            Command::Show => Response::output(preview(&self.model)),
            Command::Scene => match serde_json::to_string_pretty(&self.scene()) {
                Ok(json) => Response::output(json),
                Err(err) => Response::status(Status::failure("SCENE", err.to_string())),
            },
            Command::Status => Response::output(match self.status.current() {
                Some(status) => status.message.clone(),
                None => "(no status)".to_string(),
            }),
            Command::Help => Response::output(HELP.to_string()),
            Command::Quit => Response { quit: true, ..Response::default() },
        }
    }

    /// Write the current diagram as SVG.
    pub async fn save(&mut self, path: &Path) -> Result<(), DiagramError> {
        let svg = self.svg();
        save_svg(path, &svg).await
    }

    fn start_copy(&mut self) -> Response {
        if !self.clipboard.is_available() {
            return Response::status(Status::failure(
                "CLIPBOARD_UNAVAILABLE",
                "Clipboard not available. Use 'save' or 'uri' and copy the SVG manually.",
            ));
        }
        let svg = self.svg();
        let clipboard = self.clipboard.clone();
        let tx = self.copy_tx.clone();
        tokio::spawn(async move {
            let result = clipboard.write_text(svg).await;
            // The session may already be gone.
            let _ = tx.send(result);
        });
        self.pending_copies += 1;
        Response::default()
    }

    /// Turn a finished clipboard write into a status message.
    pub fn finish_copy(&mut self, result: CopyResult) -> Status {
        self.pending_copies = self.pending_copies.saturating_sub(1);
        let status = match result {
            Ok(()) => Status::success("COPIED", "SVG copied to clipboard!"),
            Err(err) => Status::failure(
                "COPY_FAILED",
                format!("Copy failed ({}). Use 'save' or 'uri' to copy the SVG manually.", err),
            ),
        };
        self.status.post(status.clone());
        status
    }
}
