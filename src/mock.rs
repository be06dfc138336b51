//! In-memory stand-ins for the display bus, pins and touch SPI, plus a panel
//! model that replays recorded traffic into a framebuffer.

use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::blocking::spi;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::instruction::Instruction;
use crate::{Orientation, Surface, ILI9341};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Select,
    Deselect,
    Command(u8),
    Data(Vec<u8>),
}

/// Shared record of bus traffic.
#[derive(Clone, Default)]
pub struct Log {
    events: Rc<RefCell<Vec<Event>>>,
    fail_next: Rc<Cell<bool>>,
}

impl Log {
    pub fn borrow(&self) -> Ref<'_, Vec<Event>> {
        self.events.borrow()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    fn take_failure(&self) -> bool {
        self.fail_next.replace(false)
    }
}

pub fn fail_next_transfer(log: &Log) {
    log.fail_next.set(true);
}

pub struct MockInterface {
    log: Log,
}

fn bytes(format: DataFormat<'_>) -> Result<Vec<u8>, DisplayError> {
    match format {
        DataFormat::U8(data) => Ok(data.to_vec()),
        DataFormat::U8Iter(iter) => Ok(iter.collect()),
        DataFormat::U16BEIter(iter) => Ok(iter.flat_map(u16::to_be_bytes).collect()),
        DataFormat::U16BE(words) => Ok(words.iter().flat_map(|w| w.to_be_bytes()).collect()),
        _ => Err(DisplayError::DataFormatNotImplemented),
    }
}

impl WriteOnlyDataCommand for MockInterface {
    fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        if self.log.take_failure() {
            return Err(DisplayError::BusWriteError);
        }
        for byte in bytes(cmd)? {
            self.log.push(Event::Command(byte));
        }
        Ok(())
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        if self.log.take_failure() {
            return Err(DisplayError::BusWriteError);
        }
        let data = bytes(buf)?;
        self.log.push(Event::Data(data));
        Ok(())
    }
}

/// Output pin that records chip-select transitions when attached to a log.
pub struct MockPin {
    log: Option<Log>,
    high: bool,
}

impl MockPin {
    pub fn chip_select(log: &Log) -> Self {
        Self {
            log: Some(log.clone()),
            high: true,
        }
    }

    pub fn detached() -> Self {
        Self {
            log: None,
            high: false,
        }
    }

    pub fn is_logging(&self) -> bool {
        self.log.is_some()
    }

    pub fn is_high(&self) -> bool {
        self.high
    }
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        if let Some(log) = &self.log {
            log.push(Event::Select);
        }
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        if let Some(log) = &self.log {
            log.push(Event::Deselect);
        }
        Ok(())
    }
}

pub type TestDisplay = ILI9341<MockInterface, MockPin, MockPin>;

pub fn display(width: u16, height: u16, orientation: Orientation) -> (TestDisplay, Log) {
    let log = Log::default();
    let display = ILI9341::new(
        MockInterface { log: log.clone() },
        MockPin::chip_select(&log),
        MockPin::detached(),
        Surface::new(width, height, orientation),
    );
    (display, log)
}

/// Command bytes in the order they were sent.
pub fn commands(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Command(c) => Some(*c),
            _ => None,
        })
        .collect()
}

/// Replays everything recorded so far against a panel of the display's
/// current size.
pub fn panel(display: &TestDisplay, log: &Log) -> Panel {
    Panel::replay(display.width(), display.height(), &log.borrow())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    pub fn width(&self) -> usize {
        usize::from(self.x1 - self.x0) + 1
    }

    pub fn area(&self) -> usize {
        self.width() * (usize::from(self.y1 - self.y0) + 1)
    }
}

struct Stream {
    window: Window,
    written: usize,
    pending: Option<u8>,
}

///
/// Framebuffer model of the controller.
///
/// Replay panics on any protocol violation: traffic outside a select bracket,
/// a window that leaves the panel, or a pixel stream that does not exactly
/// fill its window.
///
pub struct Panel {
    width: u16,
    height: u16,
    pixels: Vec<Option<u16>>,
    pub windows: Vec<Window>,
}

impl Panel {
    pub fn replay(width: u16, height: u16, events: &[Event]) -> Self {
        let mut panel = Panel {
            width,
            height,
            pixels: vec![None; usize::from(width) * usize::from(height)],
            windows: Vec::new(),
        };
        let mut selected = false;
        let mut command = None;
        let mut params = Vec::new();
        let mut columns = (0u16, 0u16);
        let mut rows = (0u16, 0u16);
        let mut stream: Option<Stream> = None;

        for event in events {
            match event {
                Event::Select => {
                    assert!(!selected, "bus selected twice");
                    selected = true;
                }
                Event::Deselect => {
                    Self::finish(stream.take());
                    selected = false;
                    command = None;
                }
                Event::Command(c) => {
                    assert!(selected, "command {:#04x} outside select bracket", c);
                    Self::finish(stream.take());
                    params.clear();
                    command = Some(*c);
                    if *c == Instruction::RAMWR as u8 {
                        let window = Window {
                            x0: columns.0,
                            x1: columns.1,
                            y0: rows.0,
                            y1: rows.1,
                        };
                        assert!(
                            window.x0 <= window.x1
                                && window.y0 <= window.y1
                                && window.x1 < width
                                && window.y1 < height,
                            "window {:?} outside {}x{} panel",
                            window,
                            width,
                            height
                        );
                        panel.windows.push(window);
                        stream = Some(Stream {
                            window,
                            written: 0,
                            pending: None,
                        });
                    }
                }
                Event::Data(data) => {
                    assert!(selected, "data outside select bracket");
                    match command {
                        Some(c) if c == Instruction::RAMWR as u8 => {
                            let s = stream.as_mut().expect("stream open");
                            for byte in data {
                                match s.pending.take() {
                                    None => s.pending = Some(*byte),
                                    Some(high) => {
                                        panel.put(s, u16::from_be_bytes([high, *byte]))
                                    }
                                }
                            }
                        }
                        Some(c) => {
                            params.extend_from_slice(data);
                            let range = || {
                                (
                                    u16::from_be_bytes([params[0], params[1]]),
                                    u16::from_be_bytes([params[2], params[3]]),
                                )
                            };
                            if c == Instruction::CASET as u8 && params.len() == 4 {
                                columns = range();
                            } else if c == Instruction::RASET as u8 && params.len() == 4 {
                                rows = range();
                            }
                        }
                        None => panic!("data without a command"),
                    }
                }
            }
        }
        assert!(!selected, "bus left selected");
        panel
    }

    fn put(&mut self, stream: &mut Stream, color: u16) {
        let window = stream.window;
        assert!(
            stream.written < window.area(),
            "stream overran window {:?}",
            window
        );
        let x = usize::from(window.x0) + stream.written % window.width();
        let y = usize::from(window.y0) + stream.written / window.width();
        self.pixels[y * usize::from(self.width) + x] = Some(color);
        stream.written += 1;
    }

    fn finish(stream: Option<Stream>) {
        if let Some(stream) = stream {
            assert!(stream.pending.is_none(), "odd byte count in pixel stream");
            assert_eq!(
                stream.written,
                stream.window.area(),
                "window {:?} not filled",
                stream.window
            );
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<u16> {
        assert!(x < self.width && y < self.height);
        self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    pub fn count(&self, color: u16) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Every written pixel as `(x, y, color)`.
    pub fn painted(&self) -> Vec<(i32, i32, u16)> {
        let width = usize::from(self.width);
        self.pixels
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|c| ((i % width) as i32, (i / width) as i32, c)))
            .collect()
    }
}

/// Touch controller SPI: answers each 2-byte read with the next queued
/// sample and records command bytes.
#[derive(Default)]
pub struct MockSpi {
    pub commands: Vec<u8>,
    pub responses: VecDeque<u16>,
}

impl spi::Write<u8> for MockSpi {
    type Error = Infallible;

    fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
        self.commands.extend_from_slice(words);
        Ok(())
    }
}

impl spi::Transfer<u8> for MockSpi {
    type Error = Infallible;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Infallible> {
        assert!(words.iter().all(|w| *w == 0), "touch reads transmit zeros");
        let sample = self.responses.pop_front().unwrap_or(0);
        words.copy_from_slice(&sample.to_be_bytes());
        Ok(words)
    }
}

/// Pen interrupt line that reports "pressed" (low) for a fixed number of
/// polls, then released.
pub struct MockIrq {
    presses: Cell<usize>,
}

impl MockIrq {
    pub fn pressed_for(polls: usize) -> Self {
        Self {
            presses: Cell::new(polls),
        }
    }
}

impl InputPin for MockIrq {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        let left = self.presses.get();
        if left == 0 {
            return Ok(false);
        }
        self.presses.set(left - 1);
        Ok(true)
    }
}
