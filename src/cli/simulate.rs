//! Simulate command implementation
//!
//! Drives a recognition session from a line-based script standing in for a
//! live recognizer:
//!
//! ```text
//! start
//! started
//! result interim 0.35 brake brake
//! result final 0.9 turn right | 0.4 turn light
//! error no-speech
//! wait 150
//! stop
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tokio::io::{AsyncBufReadExt, BufReader};

use voicedrive::Hypothesis;
use voicedrive::config::Config;
use voicedrive::voice::{
    Actor, RecognitionSession, Recognizer, RecognizerConfig, RecognizerError, RecognizerEvent,
    StatusSink, TranscriptMatcher,
};

/// One line of a simulation script
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Start,
    Stop,
    Toggle,
    Wait(Duration),
    Event(RecognizerEvent),
}

/// Parse a script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptStep>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let step = match keyword {
        "start" => ScriptStep::Start,
        "stop" => ScriptStep::Stop,
        "toggle" => ScriptStep::Toggle,
        "started" => ScriptStep::Event(RecognizerEvent::Started),
        "ended" => ScriptStep::Event(RecognizerEvent::Ended),
        "error" => {
            if rest.is_empty() {
                bail!("error needs a reason");
            }
            ScriptStep::Event(RecognizerEvent::error(rest))
        }
        "wait" => {
            let ms: u64 = rest
                .parse()
                .with_context(|| format!("Invalid wait duration: {}", rest))?;
            ScriptStep::Wait(Duration::from_millis(ms))
        }
        "result" => ScriptStep::Event(RecognizerEvent::Result(parse_batch(rest)?)),
        other => bail!("Unknown script keyword: {}", other),
    };

    Ok(Some(step))
}

fn parse_batch(rest: &str) -> Result<Vec<Hypothesis>> {
    let (finality, alternatives) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("result needs <final|interim> and at least one alternative"))?;

    let is_final = match finality {
        "final" => true,
        "interim" => false,
        other => bail!("Expected final or interim, got: {}", other),
    };

    alternatives
        .split('|')
        .enumerate()
        .map(|(rank, alternative)| {
            let alternative = alternative.trim();
            let (confidence, transcript) = alternative
                .split_once(char::is_whitespace)
                .unwrap_or((alternative, ""));
            let confidence: f32 = confidence
                .parse()
                .with_context(|| format!("Invalid confidence: {}", confidence))?;
            Ok(Hypothesis {
                transcript: transcript.trim().to_string(),
                confidence,
                is_final,
                alternative_rank: rank as u32,
            })
        })
        .collect()
}

/// Recognizer that only reports the requests it receives
#[derive(Debug, Default)]
struct ScriptedRecognizer;

impl Recognizer for ScriptedRecognizer {
    fn start(&mut self, config: &RecognizerConfig) -> Result<(), RecognizerError> {
        println!(
            "recognizer: start ({}, {} alternatives)",
            config.language, config.max_alternatives
        );
        Ok(())
    }

    fn stop(&mut self) -> Result<(), RecognizerError> {
        println!("recognizer: stop");
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ConsoleActor;

impl Actor for ConsoleActor {
    fn steer_left(&mut self) {
        println!("actor: steer left");
    }
    fn steer_right(&mut self) {
        println!("actor: steer right");
    }
    fn accelerate(&mut self) {
        println!("actor: accelerate");
    }
    fn brake(&mut self) {
        println!("actor: brake");
    }
    fn turn_back(&mut self) {
        println!("actor: turn back");
    }
}

#[derive(Debug, Default)]
struct ConsoleStatusSink;

impl StatusSink for ConsoleStatusSink {
    fn on_status_changed(&mut self, text: &str) {
        println!("status: Voice Control: {}", text);
    }

    fn on_ephemeral_message(&mut self, text: &str, duration: Duration) {
        println!("message: {} ({} ms)", text, duration.as_millis());
    }
}

/// Run a simulation script from a file or stdin
pub async fn simulate_command(config_path: Option<&Path>, script: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let matcher = TranscriptMatcher::new(Arc::new(config.phrase_dictionary()?));
    let mut session = RecognitionSession::new(
        ScriptedRecognizer,
        config.voice.to_session_config(),
        matcher,
        ConsoleStatusSink,
    )?;

    let actor = Rc::new(RefCell::new(ConsoleActor));
    session.bind_actor(&actor);
    let events = session.event_sender();

    let lines: Vec<String> = match script {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read script: {}", path.display()))?
            .lines()
            .map(str::to_string)
            .collect(),
        None => {
            let mut lines = Vec::new();
            let mut reader = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = reader.next_line().await? {
                lines.push(line);
            }
            lines
        }
    };

    for (index, line) in lines.iter().enumerate() {
        let step = parse_line(line).with_context(|| format!("Script line {}", index + 1))?;
        match step {
            None => continue,
            Some(ScriptStep::Start) => {
                if let Err(e) = session.start() {
                    println!("start rejected: {}", e);
                }
            }
            Some(ScriptStep::Stop) => session.stop(),
            Some(ScriptStep::Toggle) => {
                if let Err(e) = session.toggle() {
                    println!("toggle rejected: {}", e);
                }
            }
            Some(ScriptStep::Wait(duration)) => tokio::time::sleep(duration).await,
            Some(ScriptStep::Event(event)) => {
                events.send(event).context("Session event queue closed")?;
            }
        }
        session.poll();
    }

    println!("final state: {}", session.state());
    for entry in session.history().iter() {
        println!("history: {} at {}", entry, entry.at.format("%H:%M:%S%.3f"));
    }

    Ok(())
}
