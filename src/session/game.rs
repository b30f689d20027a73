//! Session controller
//!
//! `Game` is the whole surface a UI needs: start a puzzle, submit moves, ask
//! for hints. Names coming from the outside (tiers, algorithms, detail levels)
//! are resolved here, once.

use super::{GameStatus, Hint, HintDetail, Session, SessionSnapshot};
use crate::core::{Lexicon, ObstacleSet, WordGraph};
use crate::error::{LadderError, Result};
use crate::puzzle::{Difficulty, PuzzleGenerator, TierTable};
use crate::search::{AStar, Algorithm, SearchStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How to start a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartRequest {
    /// Random puzzle for a tier
    Tier(Difficulty),
    /// Player-chosen pair
    Custom { start: String, target: String },
}

/// Caller-facing game API
///
/// Holds at most one session at a time. The lexicon is borrowed and shared
/// read-only; each `Game` owns its own session and random source.
pub struct Game<'a, R = StdRng> {
    generator: PuzzleGenerator<'a>,
    rng: R,
    session: Option<Session>,
    hint_algorithm: Algorithm,
    history: Vec<SessionSnapshot>,
}

impl<'a> Game<'a, StdRng> {
    /// Game with default tiers, seeded from the OS
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_generator(PuzzleGenerator::new(lexicon), StdRng::from_os_rng())
    }

    /// Game whose puzzles are reproducible from `seed`
    #[must_use]
    pub fn with_seed(lexicon: &'a Lexicon, seed: u64) -> Self {
        Self::with_generator(PuzzleGenerator::new(lexicon), StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> Game<'a, R> {
    #[must_use]
    pub const fn with_generator(generator: PuzzleGenerator<'a>, rng: R) -> Self {
        Self {
            generator,
            rng,
            session: None,
            hint_algorithm: Algorithm::AStar,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.generator.lexicon()
    }

    #[must_use]
    pub const fn tiers(&self) -> &TierTable {
        self.generator.tiers()
    }

    /// Start a new session, replacing any current one
    ///
    /// # Errors
    /// See [`Game::start_custom`] and [`PuzzleGenerator::generate`].
    pub fn start(&mut self, request: StartRequest) -> Result<SessionSnapshot> {
        let session = match request {
            StartRequest::Tier(difficulty) => {
                let puzzle = self.generator.generate(difficulty, &mut self.rng)?;
                Session::from_puzzle(puzzle)
            }
            StartRequest::Custom { start, target } => self.custom_session(&start, &target)?,
        };

        let snapshot = session.snapshot();
        log::debug!(
            "started {} puzzle {} -> {}",
            snapshot.difficulty,
            snapshot.start_word,
            snapshot.target_word
        );
        self.session = Some(session);
        Ok(snapshot)
    }

    /// Start a random puzzle by tier name
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown tier name, `GenerationFailure` if the
    /// tier cannot produce a puzzle.
    pub fn start_tier(&mut self, name: &str) -> Result<SessionSnapshot> {
        let difficulty = Difficulty::from_name(name)?;
        self.start(StartRequest::Tier(difficulty))
    }

    /// Start a player-chosen pair
    ///
    /// # Errors
    /// `InvalidArgument` if the words differ in length, are equal or are not in
    /// the dictionary; `Unsolvable` if no ladder connects them.
    pub fn start_custom(&mut self, start: &str, target: &str) -> Result<SessionSnapshot> {
        self.start(StartRequest::Custom {
            start: start.to_string(),
            target: target.to_string(),
        })
    }

    fn custom_session(&self, start: &str, target: &str) -> Result<Session> {
        let start = start.trim().to_ascii_lowercase();
        let target = target.trim().to_ascii_lowercase();

        if start.len() != target.len() {
            return Err(LadderError::invalid_argument(format!(
                "'{start}' and '{target}' have different lengths"
            )));
        }
        if start == target {
            return Err(LadderError::invalid_argument(
                "start and target words must differ",
            ));
        }
        let lexicon = self.lexicon();
        if let Some(unknown) = [&start, &target].into_iter().find(|w| !lexicon.contains(w)) {
            return Err(LadderError::invalid_argument(format!(
                "'{unknown}' is not in the dictionary"
            )));
        }
        if AStar
            .find_path(&WordGraph::unrestricted(lexicon), &start, &target)
            .is_none()
        {
            return Err(LadderError::Unsolvable { start, target });
        }

        let difficulty = Difficulty::for_word_length(start.len());
        let max_moves = self.tiers().get(difficulty).max_moves;
        Ok(Session::new(
            start,
            target,
            difficulty,
            max_moves,
            ObstacleSet::default(),
        ))
    }

    /// Submit the next word
    ///
    /// # Errors
    /// `InvalidState` with no session or a finished one, `InvalidMove` for an
    /// illegal word. Failed moves change nothing.
    pub fn make_move(&mut self, word: &str) -> Result<SessionSnapshot> {
        let lexicon = self.generator.lexicon();
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| LadderError::invalid_state("no game in progress"))?;

        let status = session.make_move(lexicon, word)?;
        let snapshot = session.snapshot();
        if status != GameStatus::Playing {
            self.history.push(snapshot.clone());
        }
        Ok(snapshot)
    }

    /// Hint using the configured algorithm
    ///
    /// # Errors
    /// `InvalidState` with no session or a finished one.
    pub fn get_hint(&self, detail: HintDetail) -> Result<Hint> {
        self.get_hint_with(self.hint_algorithm, detail)
    }

    /// Hint using an explicit algorithm
    ///
    /// # Errors
    /// `InvalidState` with no session or a finished one.
    pub fn get_hint_with(&self, algorithm: Algorithm, detail: HintDetail) -> Result<Hint> {
        let session = self.active_session()?;
        Ok(session.hint(self.lexicon(), algorithm, detail))
    }

    /// Hint with algorithm and detail level given by name
    ///
    /// # Errors
    /// `InvalidArgument` for unknown names, `InvalidState` as for `get_hint`.
    pub fn hint_by_name(&self, algorithm: &str, detail: &str) -> Result<Hint> {
        let algorithm = Algorithm::from_name(algorithm)?;
        let detail = HintDetail::from_name(detail)?;
        self.get_hint_with(algorithm, detail)
    }

    /// Choose the algorithm used by later hints
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown name; the previous choice is kept.
    pub fn set_hint_algorithm(&mut self, name: &str) -> Result<()> {
        self.hint_algorithm = Algorithm::from_name(name)?;
        Ok(())
    }

    pub const fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.hint_algorithm = algorithm;
    }

    #[must_use]
    pub const fn hint_algorithm(&self) -> Algorithm {
        self.hint_algorithm
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(Session::snapshot)
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Snapshots of every session that ended in a win or a loss
    #[must_use]
    pub fn history(&self) -> &[SessionSnapshot] {
        &self.history
    }

    fn active_session(&self) -> Result<&Session> {
        match &self.session {
            None => Err(LadderError::invalid_state("no game in progress")),
            Some(session) if session.status().is_finished() => Err(LadderError::invalid_state(
                format!("the puzzle is already {}", session.status()),
            )),
            Some(session) => Ok(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::build_lexicon;

    fn lexicon() -> Lexicon {
        build_lexicon([
            "cat", "cot", "cog", "dog", "dot", "hot", "hat", "stone", "shone", "ink",
        ])
    }

    #[test]
    fn custom_pair_session() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);

        let snapshot = game.start_custom("Cat", "DOG").unwrap();
        assert_eq!(snapshot.start_word, "cat");
        assert_eq!(snapshot.target_word, "dog");
        assert_eq!(snapshot.difficulty, Difficulty::Beginner);
        assert_eq!(snapshot.max_moves, 5);
        assert!(snapshot.banned_words.is_empty());
        assert!(snapshot.restricted_letters.is_empty());
    }

    #[test]
    fn custom_pair_difficulty_from_length() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);

        let snapshot = game.start_custom("stone", "shone").unwrap();
        assert_eq!(snapshot.difficulty, Difficulty::Advanced);
        assert_eq!(snapshot.max_moves, 7);
    }

    #[test]
    fn custom_pair_validation() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);

        assert!(matches!(
            game.start_custom("cat", "stone"),
            Err(LadderError::InvalidArgument(_))
        ));
        assert!(matches!(
            game.start_custom("cat", "cat"),
            Err(LadderError::InvalidArgument(_))
        ));
        assert!(matches!(
            game.start_custom("cat", "zzz"),
            Err(LadderError::InvalidArgument(_))
        ));
        assert_eq!(
            game.start_custom("cat", "ink"),
            Err(LadderError::Unsolvable {
                start: "cat".to_string(),
                target: "ink".to_string(),
            })
        );
        assert!(game.snapshot().is_none());
    }

    #[test]
    fn custom_pair_folds_ascii_case_only() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);

        assert!(game.start_custom(" HOT ", "Dog").is_ok());
        // a KELVIN SIGN is not the letter 'k'
        assert!(matches!(
            game.start_custom("cat", "in\u{212A}"),
            Err(LadderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_tier_name() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);

        assert!(matches!(
            game.start_tier("EASY"),
            Err(LadderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn tier_session_starts_playing() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 9);

        let snapshot = game.start_tier("BEGINNER").unwrap();
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.path, vec![snapshot.start_word.clone()]);
        assert_ne!(snapshot.start_word, snapshot.target_word);
    }

    #[test]
    fn move_without_session() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);

        assert!(matches!(
            game.make_move("cot"),
            Err(LadderError::InvalidState(_))
        ));
        assert!(matches!(
            game.get_hint(HintDetail::Basic),
            Err(LadderError::InvalidState(_))
        ));
    }

    #[test]
    fn finished_games_recorded_in_history() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);

        game.start_custom("cat", "cot").unwrap();
        let snapshot = game.make_move("cot").unwrap();
        assert_eq!(snapshot.status, GameStatus::Won);
        assert_eq!(game.history(), [snapshot]);

        assert!(matches!(
            game.make_move("cat"),
            Err(LadderError::InvalidState(_))
        ));
        assert!(matches!(
            game.get_hint(HintDetail::Basic),
            Err(LadderError::InvalidState(_))
        ));
    }

    #[test]
    fn hint_algorithm_selection() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);
        game.start_custom("cat", "dog").unwrap();

        assert_eq!(game.hint_algorithm(), Algorithm::AStar);
        game.set_hint_algorithm("bfs").unwrap();
        assert_eq!(game.hint_algorithm(), Algorithm::Bfs);
        assert_eq!(game.get_hint(HintDetail::Basic).unwrap().algorithm, Algorithm::Bfs);

        assert!(game.set_hint_algorithm("greedy").is_err());
        assert_eq!(game.hint_algorithm(), Algorithm::Bfs);
    }

    #[test]
    fn hint_by_name_validates_names() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);
        game.start_custom("cat", "dog").unwrap();

        let hint = game.hint_by_name("ucs", "full").unwrap();
        assert_eq!(hint.full_path.unwrap().steps(), 3);
        assert!(game.hint_by_name("dfs", "basic").is_err());
        assert!(game.hint_by_name("ucs", "everything").is_err());
    }

    #[test]
    fn hint_does_not_mutate_session() {
        let lexicon = lexicon();
        let mut game = Game::with_seed(&lexicon, 1);
        game.start_custom("cat", "dog").unwrap();
        let before = game.snapshot();

        let first = game.get_hint(HintDetail::Basic).unwrap();
        let second = game.get_hint(HintDetail::Basic).unwrap();
        assert_eq!(first.next_word, second.next_word);
        assert_eq!(game.snapshot(), before);
    }
}
