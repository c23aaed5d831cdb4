#[cfg(test)]
mod tests {
    use tokio::io::BufReader;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    use crate::config::file::DiagramConfig;
    use crate::diagram::{Cell, Mode};
    use crate::session::command::{ColorTarget, Command};
    use crate::session::runner::run;
    use crate::session::{Clipboard, CopyResult, Session};

    fn session_with(clipboard: Clipboard) -> (Session, UnboundedReceiver<CopyResult>) {
        let (tx, rx) = unbounded_channel();
        let session = Session::new(&DiagramConfig::default(), clipboard, tx).expect("default config");
        (session, rx)
    }

    fn session() -> Session {
        session_with(Clipboard::Unavailable).0
    }

    async fn code(session: &mut Session, command: Command) -> &'static str {
        session.dispatch(command).await.status.expect("status posted").code
    }

    #[tokio::test]
    async fn test_activation_commands_place_tiles() {
        let mut session = session();
        assert_eq!(code(&mut session, Command::Activate { row: 0, col: 0 }).await, "SELECTED");
        assert_eq!(code(&mut session, Command::Activate { row: 0, col: 1 }).await, "TILE_PLACED");
        assert_eq!(session.model().tiles().len(), 1);
        assert_eq!(session.current_status().map(|s| s.code), Some("TILE_PLACED"));
    }

    #[tokio::test]
    async fn test_click_resolves_through_the_scene() {
        let mut session = session();
        // Default cell size is 50.
        assert_eq!(code(&mut session, Command::Click { x: 120.0, y: 30.0 }).await, "SELECTED");
        assert_eq!(session.model().selection(), Some(Cell::new(0, 2)));
        assert_eq!(code(&mut session, Command::Click { x: 120.0, y: 80.0 }).await, "TILE_PLACED");
        assert_eq!(code(&mut session, Command::Click { x: 9999.0, y: 1.0 }).await, "MISSED");
        assert_eq!(code(&mut session, Command::Click { x: f64::NAN, y: 10.0 }).await, "MISSED");
        assert_eq!(code(&mut session, Command::Click { x: 10.0, y: f64::INFINITY }).await, "MISSED");
        assert_eq!(session.model().selection(), None);
    }

    #[tokio::test]
    async fn test_keyboard_activation() {
        let mut session = session();
        let press = |row, col, key: &str| Command::Key { row, col, key: key.to_string() };
        assert_eq!(code(&mut session, press(3, 3, "Enter")).await, "SELECTED");
        assert_eq!(code(&mut session, press(3, 4, "space")).await, "TILE_PLACED");
        assert_eq!(code(&mut session, press(20, 20, "Enter")).await, "OUT_OF_BOUNDS");
        assert!(session.dispatch(press(1, 1, "Tab")).await.status.is_none());
        assert_eq!(session.model().selection(), None);
    }

    #[tokio::test]
    async fn test_marker_mode_and_warnings() {
        let mut session = session();
        session.dispatch(Command::Activate { row: 0, col: 0 }).await;
        session.dispatch(Command::Activate { row: 1, col: 0 }).await;
        session.dispatch(Command::Mode { mode: Mode::Marker }).await;

        let response = session.dispatch(Command::Activate { row: 1, col: 0 }).await;
        let status = response.status.unwrap();
        assert_eq!(status.code, "CANNOT_PLACE");
        assert!(!status.success);

        assert_eq!(code(&mut session, Command::Activate { row: 2, col: 3 }).await, "MARKER_ADDED");
        assert_eq!(code(&mut session, Command::Activate { row: 2, col: 3 }).await, "MARKER_REMOVED");
        assert!(session.model().markers().is_empty());
    }

    #[tokio::test]
    async fn test_size_and_color_validation() {
        let mut session = session();
        session.dispatch(Command::Activate { row: 0, col: 0 }).await;
        session.dispatch(Command::Activate { row: 0, col: 1 }).await;

        assert_eq!(code(&mut session, Command::Size { width: 0, height: 4 }).await, "INVALID_DIMENSION");
        assert_eq!(session.model().tiles().len(), 1);
        assert_eq!(code(&mut session, Command::Size { width: -1, height: 5 }).await, "INVALID_DIMENSION");
        assert_eq!(session.model().tiles().len(), 1);
        assert_eq!(code(&mut session, Command::Size { width: 4, height: 5 }).await, "RESIZED");
        assert!(session.model().tiles().is_empty());
        assert_eq!((session.model().width(), session.model().height()), (4, 5));

        let bad = Command::Color { target: ColorTarget::Stroke, color: "purple".into() };
        assert_eq!(code(&mut session, bad).await, "INVALID_COLOR");
        let good = Command::Color { target: ColorTarget::Dark, color: "#010203".into() };
        assert_eq!(code(&mut session, good).await, "COLOR");
        assert_eq!(session.model().palette().checker_dark.as_str(), "#010203");
    }

    #[tokio::test]
    async fn test_outputs() {
        let mut session = session();
        session.dispatch(Command::Activate { row: 0, col: 0 }).await;
        session.dispatch(Command::Activate { row: 0, col: 1 }).await;

        let preview = session.dispatch(Command::Show).await.output.unwrap();
        assert!(preview.starts_with("===="));
        assert!(preview.contains("tiles: 1"));

        let uri = session.dispatch(Command::Uri).await.output.unwrap();
        assert!(uri.starts_with("data:image/svg+xml;charset=utf-8,%3Csvg"));

        let json = session.dispatch(Command::Scene).await.output.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cell_size"], 50);

        assert!(session.dispatch(Command::Help).await.output.unwrap().contains("activate"));
        assert!(session.dispatch(Command::Quit).await.quit);
    }

    #[tokio::test]
    async fn test_save_writes_the_svg() {
        let mut session = session();
        session.dispatch(Command::Activate { row: 2, col: 2 }).await;
        session.dispatch(Command::Activate { row: 3, col: 2 }).await;
        let path = std::env::temp_dir().join(format!("tile-diagram-session-{}.svg", std::process::id()));

        assert_eq!(code(&mut session, Command::Save { path: Some(path.clone()) }).await, "SAVED");
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, session.svg());
        assert_eq!(written.matches("class=\"tile\"").count(), 1);
        let _ = std::fs::remove_file(&path);

        let unwritable = Command::Save { path: Some("/nonexistent-dir/a/b.svg".into()) };
        assert_eq!(code(&mut session, unwritable).await, "IO");
    }

    #[tokio::test]
    async fn test_copy_without_clipboard_degrades() {
        let mut session = session();
        let status = session.dispatch(Command::Copy).await.status.unwrap();
        assert_eq!(status.code, "CLIPBOARD_UNAVAILABLE");
        assert_eq!(session.pending_copies(), 0);
        assert_eq!(session.model().tiles().len(), 0);
    }

    #[tokio::test]
    async fn test_copy_failure_leaves_model_untouched() {
        let (mut session, mut rx) = session_with(Clipboard::from_command_line(Some("no-such-clipboard-helper-7113")));
        session.dispatch(Command::Activate { row: 0, col: 0 }).await;
        assert!(session.dispatch(Command::Copy).await.status.is_none());
        assert_eq!(session.pending_copies(), 1);

        let result = rx.recv().await.expect("copy reported");
        let status = session.finish_copy(result);
        assert_eq!(status.code, "COPY_FAILED");
        assert_eq!(session.pending_copies(), 0);
        assert_eq!(session.model().selection(), Some(Cell::new(0, 0)));
    }

    #[tokio::test]
    async fn test_runner_executes_a_script() {
        let (mut session, mut rx) = session_with(Clipboard::Unavailable);
        let script = "\
# a small diagram
activate 0 0
activate 0 1
{\"command\":\"mode\",\"mode\":\"marker\"}
activate 4 4
bogus command
quit
activate 5 5
";
        run(&mut session, BufReader::new(script.as_bytes()), &mut rx).await.unwrap();
        assert_eq!(session.model().tiles().len(), 1);
        assert_eq!(session.model().markers().len(), 1);
        assert_eq!(session.model().mode(), Mode::Marker);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runner_waits_for_pending_copies() {
        let (mut session, mut rx) = session_with(Clipboard::from_command_line(Some("cat")));
        run(&mut session, BufReader::new("activate 0 0\ncopy\n".as_bytes()), &mut rx).await.unwrap();
        assert_eq!(session.pending_copies(), 0);
        assert_eq!(session.current_status().map(|s| s.code), Some("COPIED"));
    }
}
