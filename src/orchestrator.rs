//! Line-oriented command interpreter driving one game.
//!
//! The [`Orchestrator`] owns the authoritative [`Position`] and is the only
//! thing that submits moves to it. Every command goes through
//! [`Orchestrator::run_line`], which writes its output to any
//! [`std::io::Write`], so a session can be driven from stdin or from a test.
//!
//! # Commands
//!
//! ```text
//! move <from><to>[promotion]     play a move, e.g. `move e2e4`, `move a7a8q`
//! board                          draw the board from the side to move
//! pieces                         list pieces on the board and captured
//! fen                            print the position as FEN
//! status                         turn, check and draw information
//! draw                           claim a draw if one is available
//! suggest [move] [difficulty]    ask the engine; `move` also plays it
//! random [move]                  pick a random legal move
//! auto <command>                 run now and before each of this side's turns
//! new [fen]                      start over, optionally from a FEN
//! help                           this list
//! ```
//!
//! # Auto Commands
//!
//! `auto` registers a command for the side to move when it is issued. After
//! any move, the commands registered for the new side to move run in order.
//! If one of them plays a move the cycle repeats for the other side, up to
//! [`AUTO_PLY_LIMIT`] plies per command line so two automatic players cannot
//! loop forever in a dead drawn position.

use std::io::{self, Write};

use log::{info, warn};

use crate::agent::{MoveSuggester, RandomSuggester, StockfishSuggester};
use crate::config::{parse_difficulty, SessionConfig};
use crate::error::SuggestError;
use crate::game_repr::{Layout, Move, Position, Side};
use crate::notation::parse_coordinate_move;
use crate::render::render_board;

/// Most plies auto commands may play in response to one command line.
pub const AUTO_PLY_LIMIT: usize = 500;

const HELP: &str = "\
available commands:
move <from><to>[promotion]
\tmakes a move in coordinate notation
\tex: `move e2e4` or `move a7a8q`
board
\tshows the board from the side to move
pieces
\tlists the pieces left on the board and the ones captured
fen
\tprints the position in FEN
status
\tshows whose turn it is, check and available draws
draw
\tclaims a draw (fifty-move rule, threefold repetition, insufficient material)
suggest [move] [difficulty]
\tasks the engine for a move; with `move` the engine also plays it
\tex: `suggest` or `suggest move 10`
random [move]
\tpicks a random legal move; with `move` it is also played
auto <command>
\truns the command now AND before every turn of the current side
\tex: `auto board` or `auto suggest move 5`
new [fen]
\tstarts a new game, from the standard layout or the given FEN
help
\tshows this list
";

/// Root component of a terminal session.
pub struct Orchestrator {
    /// The game being played
    position: Position,

    config: SessionConfig,

    /// Engine consulted by `suggest`
    engine: Box<dyn MoveSuggester>,

    /// Source of `random` moves
    random: RandomSuggester,

    /// Commands registered with `auto`, indexed by `Side::index()`
    auto: [Vec<Vec<String>>; 2],

    /// Set whenever a move is committed; drives the auto cycle
    moved: bool,
}

impl Orchestrator {
    /// Standard game with a Stockfish suggester built from `config`.
    pub fn new(config: SessionConfig) -> Self {
        let engine = Box::new(StockfishSuggester::from_config(&config));
        Self::with_suggesters(config, engine, RandomSuggester::new())
    }

    /// Standard game with explicit suggesters.
    pub fn with_suggesters(config: SessionConfig, engine: Box<dyn MoveSuggester>, random: RandomSuggester) -> Self {
        Self {
            position: Position::new_game(Layout::Standard),
            config,
            engine,
            random,
            auto: [Vec::new(), Vec::new()],
            moved: false,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Run one line of input, then any auto commands it triggers.
    ///
    /// Returns whether the command itself succeeded. Only I/O errors on
    /// `out` are propagated.
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        self.moved = false;
        let ok = self.run(&fields, out)?;
        if self.moved {
            self.run_autos(out)?;
        }
        Ok(ok)
    }

    fn run<W: Write>(&mut self, fields: &[String], out: &mut W) -> io::Result<bool> {
        let Some(command) = fields.first() else {
            out.write_all(HELP.as_bytes())?;
            return Ok(false);
        };
        let args = &fields[1..];

        match command.as_str() {
            "move" => self.cmd_move(args, out),
            "board" | "print" => {
                write!(out, "{}", render_board(&self.position))?;
                Ok(true)
            }
            "pieces" => self.cmd_pieces(out),
            "fen" => {
                writeln!(out, "{}", self.position.to_fen())?;
                Ok(true)
            }
            "status" => self.cmd_status(out),
            "draw" => self.cmd_draw(out),
            "suggest" | "stockfish" => self.cmd_suggest(args, out),
            "random" => self.cmd_random(args, out),
            "auto" => self.cmd_auto(args, out),
            "new" => self.cmd_new(args, out),
            "help" => {
                out.write_all(HELP.as_bytes())?;
                Ok(true)
            }
            _ => {
                warn!("unknown command {:?}", fields);
                writeln!(out, "unknown command: {:?}", fields.join(" "))?;
                out.write_all(HELP.as_bytes())?;
                Ok(false)
            }
        }
    }

    fn cmd_move<W: Write>(&mut self, args: &[String], out: &mut W) -> io::Result<bool> {
        let Some(text) = args.first() else {
            writeln!(out, "syntax: move <from><to>[promotion], ex: `move e2e4` or `move a7a8q`")?;
            return Ok(false);
        };
        let mv = match parse_coordinate_move(&self.position, text) {
            Ok(mv) => mv,
            Err(e) => {
                warn!("rejected move text {:?}: {}", text, e);
                writeln!(out, "error: {}", e)?;
                return Ok(false);
            }
        };
        if let Err(e) = self.position.attempt_move(mv) {
            warn!("rejected move {}: {}", mv, e);
            writeln!(out, "error: {}", e)?;
            return Ok(false);
        }

        self.moved = true;
        writeln!(out, "{} plays {}{}", mv.piece.side, mv, self.position.check_annotation())?;
        self.report_state(out)?;
        Ok(true)
    }

    /// Game end or draw availability after a move.
    fn report_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let completion = self.position.completion();
        if completion.is_done() {
            writeln!(out, "game over: {} ({})", completion, completion.result_tag())?;
        } else if let Some(reason) = self.position.draw_eligibility() {
            writeln!(out, "{} may claim a draw by {} (`draw`)", self.position.side_to_move(), reason)?;
        }
        Ok(())
    }

    fn cmd_pieces<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        for side in [Side::White, Side::Black] {
            writeln!(out, "{}:", side.to_string().to_lowercase())?;
            for piece in self.position.pieces_of(side) {
                writeln!(out, "\t{} {}", piece.kind, piece.square)?;
            }
            let captured = self.position.captured_of(side);
            if !captured.is_empty() {
                let names: Vec<String> = captured.iter().map(|piece| piece.kind.to_string()).collect();
                writeln!(out, "\tcaptured: {}", names.join(", "))?;
            }
        }
        Ok(true)
    }

    fn cmd_status<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        let pos = &self.position;
        let completion = pos.completion();
        if completion.is_done() {
            writeln!(out, "game over: {} ({})", completion, completion.result_tag())?;
            return Ok(true);
        }

        let side = pos.side_to_move();
        write!(out, "move {}, {} to play", pos.fullmove_number(), side)?;
        if pos.in_check(side) {
            write!(out, ", in check")?;
        }
        writeln!(out)?;
        writeln!(out, "halfmove clock: {}", pos.halfmove_clock())?;
        match pos.draw_eligibility() {
            Some(reason) => writeln!(out, "draw available: {}", reason)?,
            None => writeln!(out, "no draw available")?,
        }
        Ok(true)
    }

    fn cmd_draw<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        if self.position.completion().is_done() {
            writeln!(out, "error: the game is already over")?;
            return Ok(false);
        }
        match self.position.claim_draw() {
            Some(reason) => {
                writeln!(out, "draw by {} (1/2-1/2)", reason)?;
                Ok(true)
            }
            None => {
                writeln!(out, "error: no draw is available")?;
                Ok(false)
            }
        }
    }

    fn cmd_suggest<W: Write>(&mut self, args: &[String], out: &mut W) -> io::Result<bool> {
        let mut play = false;
        let mut rest = args;
        if rest.first().map(String::as_str) == Some("move") {
            play = true;
            rest = &rest[1..];
        }

        let level = match rest.first() {
            Some(text) => match parse_difficulty(text) {
                Ok(level) => level,
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    return Ok(false);
                }
            },
            None => self.config.difficulty,
        };
        self.engine.set_difficulty(level);

        writeln!(out, "running {}...", self.engine.name())?;
        let suggestion = self.engine.suggest(&self.position);
        self.use_suggestion(suggestion, play, out)
    }

    fn cmd_random<W: Write>(&mut self, args: &[String], out: &mut W) -> io::Result<bool> {
        let play = args.first().map(String::as_str) == Some("move");
        let suggestion = self.random.suggest(&self.position);
        self.use_suggestion(suggestion, play, out)
    }

    fn use_suggestion<W: Write>(
        &mut self,
        suggestion: Result<Move, SuggestError>,
        play: bool,
        out: &mut W,
    ) -> io::Result<bool> {
        let mv = match suggestion {
            Ok(mv) => mv,
            Err(e) => {
                warn!("suggestion failed: {}", e);
                writeln!(out, "error: {}", e)?;
                return Ok(false);
            }
        };
        if play {
            self.cmd_move(&[mv.to_string()], out)
        } else {
            writeln!(out, "suggested: {}", mv)?;
            Ok(true)
        }
    }

    fn cmd_auto<W: Write>(&mut self, args: &[String], out: &mut W) -> io::Result<bool> {
        if args.is_empty() || args[0] == "auto" {
            writeln!(out, "syntax: auto <command>, ex: `auto board` or `auto suggest move`")?;
            return Ok(false);
        }
        let side = self.position.side_to_move();
        if !self.run(args, out)? {
            return Ok(false);
        }
        self.auto[side.index()].push(args.to_vec());
        writeln!(out, "`{}` will now run before {} plays", args.join(" "), side)?;
        info!("auto command {:?} registered for {}", args, side);
        Ok(true)
    }

    fn cmd_new<W: Write>(&mut self, args: &[String], out: &mut W) -> io::Result<bool> {
        let position = if args.is_empty() {
            Position::new_game(Layout::Standard)
        } else {
            match Position::from_fen(&args.join(" ")) {
                Ok(position) => position,
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    return Ok(false);
                }
            }
        };
        self.position = position;
        self.auto = [Vec::new(), Vec::new()];
        writeln!(out, "new game, {} to play", self.position.side_to_move())?;
        Ok(true)
    }

    /// Run auto commands for whoever is to move, for as long as they keep
    /// producing moves.
    fn run_autos<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let mut plies = 0;
        while !self.position.completion().is_done() {
            let side = self.position.side_to_move();
            let commands = self.auto[side.index()].clone();
            if commands.is_empty() {
                break;
            }

            self.moved = false;
            for command in &commands {
                self.run(command, out)?;
            }
            if !self.moved {
                break;
            }

            plies += 1;
            if plies >= AUTO_PLY_LIMIT {
                writeln!(out, "auto commands stopped after {} plies", plies)?;
                break;
            }
        }
        Ok(())
    }
}
