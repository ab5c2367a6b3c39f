use crate::config::Config;
use std::io;
use std::sync::mpsc;
use std::thread;

use termion::input::TermRead;

pub enum Event {
    Input(termion::event::Event),
    Tick,
}

/// Fans terminal input and a periodic tick into one channel. One reader
/// thread per stdin, one ticker; both end when the receiver goes away.
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    _input_handle: thread::JoinHandle<()>,
    _tick_handle: thread::JoinHandle<()>,
}

impl Dispatcher {
    pub fn from_config(config: &Config) -> Dispatcher {
        let tick_rate = config.tick_rate;
        let (tx, rx) = mpsc::channel();

        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                for event in stdin.events().flatten() {
                    if tx.send(Event::Input(event)).is_err() {
                        return;
                    }
                }
            })
        };

        let tick_handle = thread::spawn(move || loop {
            if tx.send(Event::Tick).is_err() {
                return;
            }
            thread::sleep(tick_rate);
        });

        Dispatcher {
            rx,
            _input_handle: input_handle,
            _tick_handle: tick_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
