use std::cmp::max;
use std::fmt::{Display, Formatter};

use internal_iterator::InternalIterator;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::hand::Hand;
use crate::placement::{Placement, Placements};
use crate::tile::Tile;

/// Settings for [BestOpening::find_with].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SearchConfig {
    /// The number of worker threads the placements are split over, `1` searches on the calling thread.
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threads: num_cpus::get(),
        }
    }
}

impl SearchConfig {
    pub fn single_threaded() -> Self {
        SearchConfig { threads: 1 }
    }
}

/// The search for the highest scoring opening of a hand on a board.
#[derive(Debug, Clone)]
pub struct BestOpening {
    board: Board,
    hand: Hand,
    dictionary: Dictionary,
}

/// The winning placement and the board it results in.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Opening {
    pub word: String,
    pub placement: Placement,
    pub score: u64,
    pub board: Board,
}

/// A best scoring word together with the hand tiles it will be spelled with.
#[derive(Debug)]
struct Candidate<'a> {
    word: &'a str,
    tiles: Vec<Tile>,
}

/// A single (word, placement) pair, `index` is its position in the enumeration order.
#[derive(Debug, Copy, Clone)]
struct Job {
    index: usize,
    candidate: usize,
    placement: Placement,
}

impl BestOpening {
    pub fn new(board: Board, hand: Hand, dictionary: Dictionary) -> Self {
        BestOpening {
            board,
            hand,
            dictionary,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The words that can be spelled with the hand and fit on the board in at least one direction,
    /// in dictionary order.
    pub fn valid_words(&self) -> Vec<&str> {
        let max_len = max(self.board.num_rows(), self.board.num_cols());
        self.dictionary
            .words()
            .filter(|word| word.chars().count() <= max_len && self.hand.can_form(word))
            .collect_vec()
    }

    /// The valid words with the highest tile score, together with that score.
    pub fn best_words(&self) -> Result<(u64, Vec<&str>)> {
        let valid = self.valid_words();
        debug!("{} of {} words are valid", valid.len(), self.dictionary.len());

        let scored = valid
            .into_iter()
            .filter_map(|word| Some((word, self.hand.word_score(word)?)))
            .collect_vec();

        let best_score = scored.iter().map(|&(_, score)| score).max().ok_or(Error::NoLegalPlacement)?;
        let best = scored
            .into_iter()
            .filter(|&(_, score)| score == best_score)
            .map(|(word, _)| word)
            .collect_vec();

        debug!("best word score {} reached by {:?}", best_score, best);
        Ok((best_score, best))
    }

    /// All placements of a word with length `len` on this board.
    pub fn placements(&self, len: usize) -> Placements {
        Placements::new(self.board.num_cols(), self.board.num_rows(), len)
    }

    /// Find the best opening, searching on the current thread.
    ///
    /// Ties are broken by enumeration order: best words in dictionary order, for each word first the
    /// horizontal placements (by row, then column) and then the vertical ones (by column, then row).
    /// The first board reaching the maximum score wins.
    pub fn find(&self) -> Result<Opening> {
        self.find_with(&SearchConfig::single_threaded())
    }

    /// Same as [BestOpening::find], with the placements split over `config.threads` worker threads.
    /// The result is identical to the single threaded one, including the tie-break.
    pub fn find_with(&self, config: &SearchConfig) -> Result<Opening> {
        let (_, words) = self.best_words()?;

        let candidates = words
            .into_iter()
            .filter_map(|word| {
                let tiles = self.hand.tiles_for(word)?;
                Some(Candidate { word, tiles })
            })
            .collect_vec();

        let mut jobs = vec![];
        for (candidate_index, candidate) in candidates.iter().enumerate() {
            self.placements(candidate.tiles.len()).for_each(|placement| {
                let index = jobs.len();
                jobs.push(Job {
                    index,
                    candidate: candidate_index,
                    placement,
                })
            });
        }

        let threads = config.threads.clamp(1, max(jobs.len(), 1));
        debug!(
            "evaluating {} placements of {} words on {} thread(s)",
            jobs.len(),
            candidates.len(),
            threads
        );

        let best = if threads == 1 {
            self.evaluate(&candidates, &jobs)?
        } else {
            let chunk_size = (jobs.len() + threads - 1) / threads;
            let candidates = &candidates;

            let partial: Vec<Result<Option<(usize, Opening)>>> = std::thread::scope(|s| {
                let handles = jobs
                    .chunks(chunk_size)
                    .map(|chunk| s.spawn(move || self.evaluate(candidates, chunk)))
                    .collect_vec();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .collect_vec()
            });

            let mut best: Option<(usize, Opening)> = None;
            for result in partial {
                if let Some(curr) = result? {
                    if is_better(&curr, best.as_ref()) {
                        best = Some(curr);
                    }
                }
            }
            best
        };

        let (index, opening) = best.ok_or(Error::NoLegalPlacement)?;
        debug!("picked placement #{}: {}", index, opening);
        Ok(opening)
    }

    /// Fold `jobs` into the best opening among them, keeping the earliest one on ties.
    fn evaluate(&self, candidates: &[Candidate], jobs: &[Job]) -> Result<Option<(usize, Opening)>> {
        let mut best: Option<(usize, Opening)> = None;

        for job in jobs {
            let candidate = &candidates[job.candidate];
            let board = self.board.place(job.placement, &candidate.tiles)?;
            let score = board.score();
            trace!("{} {} -> {}", candidate.word, job.placement, score);

            if best.as_ref().map_or(true, |(_, b)| score > b.score) {
                let opening = Opening {
                    word: candidate.word.to_owned(),
                    placement: job.placement,
                    score,
                    board,
                };
                best = Some((job.index, opening));
            }
        }

        Ok(best)
    }
}

fn is_better(curr: &(usize, Opening), best: Option<&(usize, Opening)>) -> bool {
    match best {
        None => true,
        Some((best_index, best)) => {
            curr.1.score > best.score || (curr.1.score == best.score && curr.0 < *best_index)
        }
    }
}

impl Display for Opening {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} scoring {}", self.word, self.placement, self.score)
    }
}
