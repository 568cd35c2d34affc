//! Event-driven UCI engine running searches on a worker thread.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Arc, mpsc};

use tracing::{debug, info, warn};

use tempo_core::{Board, Color};
use tempo_engine::{MiniMax, MoveStrategy, SearchError, SearchResult, SearchTask, spawn_search_with};

use crate::command::{Command, GoParams, UciOption, parse_command};
use crate::error::UciError;

/// Smallest depth accepted by `setoption name Depth` and `go depth`.
pub const MIN_DEPTH: u32 = 1;
/// Largest depth accepted by `setoption name Depth` and `go depth`.
pub const MAX_DEPTH: u32 = 8;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth used by `go` without an explicit depth.
    pub depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

/// Internal engine state: idle, or searching for the given side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    Idle,
    Searching { side: Color },
}

/// Events processed by the main engine loop.
enum EngineEvent {
    UciCommand(Result<Command, UciError>),
    SearchDone(Result<SearchResult, SearchError>),
    InputClosed,
}

/// The UCI engine, holding the current board and search configuration.
///
/// Runs an event-driven loop on the main thread, dispatching searches
/// to a worker thread and processing UCI commands concurrently.
pub struct UciEngine {
    board: Board,
    strategy: Arc<dyn MoveStrategy>,
    state: EngineState,
    task: Option<SearchTask>,
    config: EngineConfig,
}

impl UciEngine {
    /// Create a new engine with the starting position and minimax search.
    pub fn new() -> Self {
        Self::with_strategy(Arc::new(MiniMax::new()), EngineConfig::default())
    }

    pub fn with_strategy(strategy: Arc<dyn MoveStrategy>, config: EngineConfig) -> Self {
        Self {
            board: Board::starting_position(),
            strategy,
            state: EngineState::Idle,
            task: None,
            config,
        }
    }

    /// Run the UCI event loop on stdin and stdout.
    pub fn run(self) -> Result<(), UciError> {
        let stdout = io::stdout();
        self.run_with(BufReader::new(io::stdin()), &mut stdout.lock())
    }

    /// Run the UCI event loop, reading commands from `input` until `quit` or
    /// end of input and writing protocol output to `out`.
    ///
    /// A search still running at exit is waited for and reported.
    pub fn run_with<R, W>(mut self, input: R, out: &mut W) -> Result<(), UciError>
    where
        R: BufRead + Send + 'static,
        W: Write,
    {
        info!(depth = self.config.depth, "tempo ready");
        let (tx, rx) = mpsc::channel::<EngineEvent>();

        let input_tx = tx.clone();
        std::thread::spawn(move || {
            for line in input.lines() {
                match line {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        debug!(cmd = %trimmed, "received UCI command");
                        if input_tx.send(EngineEvent::UciCommand(parse_command(trimmed))).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %UciError::from(e), "stdin read failed");
                        break;
                    }
                }
            }
            let _ = input_tx.send(EngineEvent::InputClosed);
        });

        for event in &rx {
            match event {
                EngineEvent::UciCommand(Ok(Command::Quit)) | EngineEvent::InputClosed => break,
                EngineEvent::UciCommand(Ok(cmd)) => self.handle_command(cmd, &tx, out)?,
                EngineEvent::UciCommand(Err(e)) => {
                    warn!(error = %e, "UCI parse error");
                }
                EngineEvent::SearchDone(outcome) => self.finish_search(outcome, out)?,
            }
            out.flush()?;
        }

        // Searches cannot be interrupted; wait for the running one.
        if self.state != EngineState::Idle {
            for event in &rx {
                if let EngineEvent::SearchDone(outcome) = event {
                    self.finish_search(outcome, out)?;
                    break;
                }
            }
        }
        out.flush()?;

        info!("tempo shutting down");
        Ok(())
    }

    fn handle_command(
        &mut self,
        cmd: Command,
        tx: &mpsc::Sender<EngineEvent>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        match cmd {
            Command::Uci => self.handle_uci(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::UciNewGame => self.board = Board::starting_position(),
            Command::Position(board) => self.board = board,
            Command::Go(params) => self.handle_go(params, tx, out)?,
            Command::Display => self.handle_display(out)?,
            Command::SetOption(opt) => self.handle_setoption(opt),
            Command::Stop => self.handle_stop(),
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_uci(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "id name tempo")?;
        writeln!(out, "id author the tempo developers")?;
        writeln!(
            out,
            "option name Depth type spin default {} min {MIN_DEPTH} max {MAX_DEPTH}",
            EngineConfig::default().depth
        )?;
        writeln!(out, "uciok")
    }

    fn handle_display(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.board.pretty())?;
        writeln!(out, "Fen: {}", self.board)
    }

    fn handle_setoption(&mut self, option: UciOption) {
        match option {
            UciOption::Depth(depth) => {
                self.config.depth = depth;
                debug!(depth, "search depth updated");
            }
        }
    }

    fn handle_go(
        &mut self,
        params: GoParams,
        tx: &mpsc::Sender<EngineEvent>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        if self.state != EngineState::Idle {
            warn!("go received while searching, ignoring");
            return Ok(());
        }

        let depth = params.depth.unwrap_or(self.config.depth);
        let side = self.board.side_to_move();
        let tx = tx.clone();
        let spawned = spawn_search_with(
            Arc::clone(&self.strategy),
            self.board.clone(),
            depth,
            move |outcome| {
                let _ = tx.send(EngineEvent::SearchDone(outcome.cloned()));
            },
        );

        match spawned {
            Ok(task) => {
                self.task = Some(task);
                self.state = EngineState::Searching { side };
            }
            Err(e) => {
                warn!(error = %e, "could not start search");
                writeln!(out, "bestmove 0000")?;
            }
        }
        Ok(())
    }

    fn handle_stop(&mut self) {
        if self.state != EngineState::Idle {
            debug!("stop received; the running search will complete");
        }
    }

    fn finish_search(
        &mut self,
        outcome: Result<SearchResult, SearchError>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let EngineState::Searching { side } = self.state else {
            warn!("search result arrived while idle, ignoring");
            return Ok(());
        };
        self.state = EngineState::Idle;
        if let Some(task) = self.task.take() {
            if let Err(e) = task.wait() {
                debug!(error = %e, "search worker did not finish cleanly");
            }
        }

        match outcome {
            Ok(result) => writeln!(out, "{}", format_report(&result, side)),
            Err(e) => {
                warn!(error = %e, "search failed");
                writeln!(out, "bestmove 0000")
            }
        }
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// The `info` and `bestmove` lines for a finished search of `side`'s move.
fn format_report(result: &SearchResult, side: Color) -> String {
    // UCI scores are from the side to move's point of view.
    let score = if side.is_white() { result.score } else { result.score.saturating_neg() };
    format!(
        "info depth {} score cp {} nodes {} time {}\nbestmove {}",
        result.depth,
        score,
        result.nodes,
        result.elapsed.as_millis(),
        result.best_move.to_uci()
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, mpsc};
    use std::time::Duration;

    use super::*;
    use tempo_core::{Move, Square, create_move};

    struct Panicking;

    impl MoveStrategy for Panicking {
        fn search(&self, _board: &Board, _depth: u32) -> SearchResult {
            panic!("strategy failure");
        }
    }

    fn run_script(engine: UciEngine, script: &'static str) -> String {
        let mut out = Vec::new();
        engine.run_with(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn score_of(output: &str) -> i32 {
        let info = output.lines().find(|l| l.starts_with("info ")).expect("info line");
        let tokens: Vec<&str> = info.split_whitespace().collect();
        let at = tokens.iter().position(|t| *t == "cp").unwrap();
        tokens[at + 1].parse().unwrap()
    }

    #[test]
    fn default_depth_within_bounds() {
        let depth = EngineConfig::default().depth;
        assert_eq!(depth, 3);
        assert!((MIN_DEPTH..=MAX_DEPTH).contains(&depth));
    }

    #[test]
    fn report_for_white() {
        let board = Board::starting_position();
        let result = SearchResult {
            best_move: create_move(&board, Square::E2, Square::E4),
            score: 35,
            nodes: 421,
            depth: 2,
            elapsed: Duration::from_millis(12),
        };
        assert_eq!(
            format_report(&result, Color::White),
            "info depth 2 score cp 35 nodes 421 time 12\nbestmove e2e4"
        );
    }

    #[test]
    fn report_flips_score_for_black() {
        let result = SearchResult {
            best_move: Move::Null,
            score: 120,
            nodes: 1,
            depth: 3,
            elapsed: Duration::ZERO,
        };
        assert_eq!(
            format_report(&result, Color::Black),
            "info depth 3 score cp -120 nodes 1 time 0\nbestmove 0000"
        );
    }

    #[test]
    fn uci_handshake() {
        let output = run_script(UciEngine::new(), "uci\nisready\nquit\n");
        assert!(output.contains("id name tempo"));
        assert!(output.contains("option name Depth type spin default 3 min 1 max 8"));
        assert!(output.contains("uciok"));
        assert!(output.contains("readyok"));
    }

    #[test]
    fn display_prints_fen() {
        let output = run_script(UciEngine::new(), "position startpos moves e2e4\nd\nquit\n");
        assert!(output.contains("Fen: rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"));
        assert!(output.contains("   a b c d e f g h"));
    }

    #[test]
    fn go_reports_best_move() {
        let output = run_script(
            UciEngine::new(),
            "position fen 4k3/8/8/8/3r4/8/8/3QK3 w - - 0 1\ngo depth 1\nquit\n",
        );
        assert!(output.contains("info depth 1 "));
        assert!(output.lines().any(|l| l == "bestmove d1d4"));
        assert!(score_of(&output) > 0);
    }

    #[test]
    fn black_score_is_from_blacks_view() {
        let output = run_script(
            UciEngine::new(),
            "position fen 4k3/8/8/8/3r4/8/8/3QK3 b - - 0 1\ngo depth 1\nquit\n",
        );
        assert!(output.lines().any(|l| l == "bestmove d4d1"));
        assert!(score_of(&output) > 0);
    }

    #[test]
    fn configured_depth_is_used() {
        let output = run_script(
            UciEngine::new(),
            "setoption name Depth value 2\nposition startpos\ngo\nquit\n",
        );
        assert!(output.contains("info depth 2 "));
    }

    #[test]
    fn search_is_reported_when_input_ends() {
        let output = run_script(UciEngine::new(), "position startpos\ngo depth 1\n");
        assert!(output.lines().any(|l| l.starts_with("bestmove ") && l != "bestmove 0000"));
    }

    #[test]
    fn out_of_range_go_is_ignored() {
        let output = run_script(UciEngine::new(), "go depth 3000\nisready\nquit\n");
        assert!(output.contains("readyok"));
        assert!(!output.contains("bestmove"));
    }

    #[test]
    fn panicking_search_reports_null_move() {
        let engine = UciEngine::with_strategy(Arc::new(Panicking), EngineConfig::default());
        let output = run_script(engine, "go depth 1\nisready\ngo depth 1\nquit\n");
        assert!(output.contains("readyok"));
        assert!(output.lines().any(|l| l == "bestmove 0000"));
        assert!(!output.contains("info depth"));
    }

    #[test]
    fn engine_recovers_after_panicking_search() {
        let mut engine = UciEngine::with_strategy(Arc::new(Panicking), EngineConfig::default());
        let (tx, rx) = mpsc::channel();
        let mut out = Vec::new();

        for _ in 0..2 {
            engine.handle_go(GoParams { depth: Some(1) }, &tx, &mut out).unwrap();
            assert_eq!(engine.state, EngineState::Searching { side: Color::White });
            let EngineEvent::SearchDone(outcome) = rx.recv().unwrap() else {
                panic!("expected a search outcome");
            };
            assert!(matches!(outcome, Err(SearchError::WorkerPanicked)));
            engine.finish_search(outcome, &mut out).unwrap();
            assert_eq!(engine.state, EngineState::Idle);
        }

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "bestmove 0000\nbestmove 0000\n");
    }
}
