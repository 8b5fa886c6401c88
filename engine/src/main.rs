extern crate common;
extern crate engine;
extern crate serde_json;
extern crate toml;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;
extern crate env_logger;

use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::env;
use std::fs::File;
use std::path::Path;
use std::net::{SocketAddr, TcpListener};

use common::{Action, MoveOutcome, Square};
use engine::game::Game;

#[derive(Deserialize, Debug)]
struct Config {
    host: SocketAddr,
}

impl Config {
    fn from_file<P: AsRef<Path> + Clone>(path: P) -> Config {
        let mut file = File::open(&path).expect("Could not open config file.");
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .expect("Reading config file failed");
        toml::from_str(&contents).expect("Config file incorrectly formatted")
    }
}

fn validate(action: &Action) -> Option<(Square, Square)> {
    let from = Square::new(action.from.0, action.from.1)?;
    let to = Square::new(action.to.0, action.to.1)?;
    Some((from, to))
}

fn main() {
    env_logger::init().unwrap();

    let args: Vec<_> = env::args().collect();

    if args.len() < 2 {
        panic!("USAGE: engine configpath");
    }
    let config = Config::from_file(&args[1]);
    let (mut input, mut output) = {
        let listen = TcpListener::bind(config.host).unwrap();
        let (raw_input, _) = listen.accept().unwrap();
        (
            BufReader::new(raw_input.try_clone().unwrap()),
            BufWriter::new(raw_input.try_clone().unwrap()),
        )
    };

    let mut game = Game::new();
    loop {
        serde_json::to_writer(&mut output, &game.state_change()).unwrap();
        writeln!(&mut output, "").unwrap();
        output.flush().unwrap();

        let mut buffer = String::new();
        input.read_line(&mut buffer).unwrap();
        let outcome = match serde_json::from_str::<Action>(buffer.trim_right()) {
            Ok(action) => {
                debug!("New move request: {:?}", action);
                match validate(&action) {
                    Some((from, to)) => match game.attempt_move(from, to) {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            error!("{}", e);
                            panic!("{}", e);
                        }
                    },
                    None => {
                        info!("Move rejected as its coordinates are off the board");
                        MoveOutcome::Rejected
                    }
                }
            }
            Err(e) => {
                warn!("Badly formatted move request: {:?}: \"{}\"", e, buffer.trim_right());
                MoveOutcome::Rejected
            }
        };

        if let MoveOutcome::AppliedGameOver(winner) = outcome {
            info!("Game over. Winner {:?}", winner);
        }

        serde_json::to_writer(&mut output, &outcome).unwrap();
        writeln!(&mut output, "").unwrap();
        output.flush().unwrap();
    }
}
