#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use myrtio_led_strip::symbol::Symbol;
use myrtio_led_strip::{CompletionSignal, Encoder, SymbolPump, Transmitter};

/// Symbol memory offered per pull, like one RMT memory block
pub const WINDOW: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(usize),
    Pull(usize),
    Done(usize),
    /// A transmission was started while another was still in flight
    Overlap(usize),
}

/// Expand a whole frame through the pull loop
pub fn drain(frame: &[u8], encoder: Encoder, window: usize) -> Vec<Symbol> {
    let mut pump = SymbolPump::new(frame, encoder);
    let mut symbols = Vec::new();
    let mut buffer = vec![Symbol::default(); window];
    while !pump.is_done() {
        let filled = pump.fill(&mut buffer);
        assert!(filled > 0, "window of {window} symbols never made progress");
        symbols.extend_from_slice(&buffer[..filled]);
    }
    symbols
}

/// Fake peripheral that streams lazily: symbols are only pulled when the
/// caller waits for completion
#[derive(Default)]
pub struct RecordingTransmitter {
    pub events: Vec<Event>,
    pub frames: Vec<Vec<u8>>,
    pub symbols: Vec<Vec<Symbol>>,
    in_flight: Option<(usize, Vec<u8>, Encoder)>,
}

impl RecordingTransmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Transmitter for RecordingTransmitter {
    type Error = ();

    fn wait_all_done(&mut self) -> Result<(), ()> {
        let Some((id, frame, encoder)) = self.in_flight.take() else {
            return Ok(());
        };
        let mut pump = SymbolPump::new(&frame, encoder);
        let mut buffer = [Symbol::default(); WINDOW];
        let mut symbols = Vec::new();
        while !pump.is_done() {
            self.events.push(Event::Pull(id));
            let filled = pump.fill(&mut buffer);
            symbols.extend_from_slice(&buffer[..filled]);
        }
        self.symbols.push(symbols);
        self.events.push(Event::Done(id));
        Ok(())
    }

    fn transmit(&mut self, frame: &[u8], encoder: Encoder) -> Result<(), ()> {
        let id = self.frames.len();
        if self.in_flight.is_some() {
            self.events.push(Event::Overlap(id));
        }
        self.events.push(Event::Start(id));
        self.frames.push(frame.to_vec());
        self.in_flight = Some((id, frame.to_vec(), encoder));
        Ok(())
    }
}

/// Fake peripheral that streams from a background thread and reports
/// completion through a [`CompletionSignal`]
pub struct ThreadedTransmitter {
    pub events: Arc<Mutex<Vec<Event>>>,
    signal: Arc<CompletionSignal>,
    worker: Option<JoinHandle<()>>,
    started: usize,
    delay: Duration,
}

impl ThreadedTransmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            signal: Arc::new(CompletionSignal::new()),
            worker: None,
            started: 0,
            delay,
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl Transmitter for ThreadedTransmitter {
    type Error = ();

    fn wait_all_done(&mut self) -> Result<(), ()> {
        self.signal.wait();
        if let Some(worker) = self.worker.take() {
            worker.join().map_err(|_| ())?;
        }
        Ok(())
    }

    fn transmit(&mut self, frame: &[u8], encoder: Encoder) -> Result<(), ()> {
        let id = self.started;
        self.started += 1;
        if !self.signal.is_signaled() {
            self.events.lock().unwrap().push(Event::Overlap(id));
        }
        self.events.lock().unwrap().push(Event::Start(id));
        self.signal.reset();

        let frame = frame.to_vec();
        let events = Arc::clone(&self.events);
        let signal = Arc::clone(&self.signal);
        let delay = self.delay;
        self.worker = Some(thread::spawn(move || {
            let mut pump = SymbolPump::new(&frame, encoder);
            let mut buffer = [Symbol::default(); WINDOW];
            while !pump.is_done() {
                thread::sleep(delay);
                events.lock().unwrap().push(Event::Pull(id));
                pump.fill(&mut buffer);
            }
            events.lock().unwrap().push(Event::Done(id));
            signal.signal();
        }));
        Ok(())
    }
}
