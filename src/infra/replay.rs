use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use time::{OffsetDateTime, format_description};
use tracing::warn;

use crate::infra::{Direction, MatchObserver, Position};
use crate::sim::{MatchError, MatchResult, MoveEvent};
use crate::state::{Board, GameObject, ObjectId};

#[derive(Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
enum ReplayRecord<'a> {
    Start {
        seed: u64,
        board: &'a Board,
    },
    Action {
        turn: i32,
        bot_id: ObjectId,
        position: Position,
        carried: i32,
        direction: Direction,
        goal: Option<Position>,
    },
    Resolved {
        turn: i32,
        bot_id: ObjectId,
        events: &'a [MoveEvent],
    },
    Finished {
        result: &'a MatchResult,
    },
}

/// Writes every match event as one JSON object per line.
pub struct ReplayObserver {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_description::parse("[year][month][day]-[hour][minute][second]")
        .ok()
        .and_then(|format| now.format(&format).ok())
        .unwrap_or_else(|| now.unix_timestamp().to_string())
}

impl ReplayObserver {
    /// Creates `<folder>/<label> - <timestamp> - <seed>.jsonl`, making the folder if needed.
    pub fn new(replays_folder: &str, label: &str, seed: u64) -> Result<Self, MatchError> {
        let path = Path::new(replays_folder).join(format!("{} - {} - {}.jsonl", label, timestamp(), seed));
        Self::create(path)
    }

    pub fn create(path: PathBuf) -> Result<Self, MatchError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&mut self, record: &ReplayRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(err) = Self::write_line(writer, record) {
            warn!("Stopped writing replay {}: {}", self.path.display(), err);
            self.writer = None;
        }
    }

    fn write_line(writer: &mut BufWriter<File>, record: &ReplayRecord) -> Result<(), MatchError> {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut()
            && let Err(err) = writer.flush()
        {
            warn!("Failed to flush replay {}: {}", self.path.display(), err);
        }
    }
}

impl MatchObserver for ReplayObserver {
    fn on_match_start(&mut self, seed: u64, board: &Board) {
        self.append(&ReplayRecord::Start { seed, board });
    }

    fn on_action_selected(
        &mut self,
        turn: i32,
        bot: &GameObject,
        direction: Direction,
        goal: Option<Position>,
    ) {
        self.append(&ReplayRecord::Action {
            turn,
            bot_id: bot.id,
            position: bot.position,
            carried: bot.carried(),
            direction,
            goal,
        });
    }

    fn on_move_resolved(&mut self, turn: i32, bot_id: ObjectId, events: &[MoveEvent]) {
        self.append(&ReplayRecord::Resolved {
            turn,
            bot_id,
            events,
        });
    }

    fn on_match_finished(&mut self, result: &MatchResult) {
        self.append(&ReplayRecord::Finished { result });
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Standing;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("diamondbot-replay-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_writes_one_json_object_per_line() {
        let path = scratch_path("lines.jsonl");
        let mut replay = ReplayObserver::create(path.clone()).unwrap();
        let bot = GameObject::bot(1, Position::new(2, 2), Position::new(0, 0));
        let board = Board::new(4, 4).with(bot.clone());

        replay.on_match_start(5, &board);
        replay.on_action_selected(1, &bot, Direction::WEST, Some(Position::new(0, 0)));
        replay.on_move_resolved(
            1,
            1,
            &[MoveEvent::Moved {
                from: Position::new(2, 2),
                to: Position::new(1, 2),
            }],
        );
        replay.on_match_finished(&MatchResult {
            seed: 5,
            turns: 1,
            standings: vec![Standing {
                bot_id: 1,
                name: "bot#1".to_string(),
                logic: "cascade",
                score: 0,
            }],
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["record"], "start");
        assert_eq!(lines[0]["board"]["width"], 4);
        assert_eq!(lines[1]["goal"]["x"], 0);
        assert_eq!(lines[2]["events"][0]["event"], "moved");
        assert_eq!(lines[3]["result"]["standings"][0]["logic"], "cascade");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_name_carries_label_and_seed() {
        let folder = scratch_path("named");
        let replay = ReplayObserver::new(folder.to_str().unwrap(), "diamondbot", 42).unwrap();
        let name = replay.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("diamondbot - "));
        assert!(name.ends_with(" - 42.jsonl"));

        let _ = std::fs::remove_file(replay.path());
    }
}
