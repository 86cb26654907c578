use std::{
    io::{self, BufRead},
    thread,
};

use log::{debug, error, info};
use tokio::sync::mpsc;

use crate::input::InputError;

/// A thread forwarding typed keys into the key queue.
#[derive(Debug)]
pub struct ConsoleReader {
    handle: thread::JoinHandle<Result<(), InputError>>,
}

impl ConsoleReader {
    /// Wait for the thread and return how reading ended. Call once the key
    /// queue has closed, so the thread has already finished.
    pub fn join(self) -> Result<(), InputError> {
        self.handle.join().unwrap_or(Err(InputError::ReaderPanicked))
    }
}

/// Read keys from stdin on a dedicated thread.
///
/// A plain thread is used so a pending read never holds up runtime shutdown.
pub fn spawn_console_reader(sender: mpsc::Sender<char>) -> Result<ConsoleReader, InputError> {
    spawn_reader(io::BufReader::new(io::stdin()), sender)
}

/// Read keys from `reader` on a dedicated thread. The thread ends, closing the
/// channel, at end of file or on the first read error.
pub fn spawn_reader<R>(reader: R, sender: mpsc::Sender<char>) -> Result<ConsoleReader, InputError>
where
    R: BufRead + Send + 'static,
{
    let handle = thread::Builder::new().name("console-input".to_string()).spawn(move || {
        match read_keys(reader, &sender) {
            Ok(()) => {
                info!("Console input reached end of file");
                Ok(())
            }
            Err(InputError::Closed) => {
                debug!("Key queue closed, console reader stopping");
                Ok(())
            }
            Err(e) => {
                error!("Console input failed: {}", e);
                Err(e)
            }
        }
    })?;
    Ok(ConsoleReader { handle })
}

/// Forward every non-whitespace character of every line as one key.
pub fn read_keys(reader: impl BufRead, sender: &mpsc::Sender<char>) -> Result<(), InputError> {
    for line in reader.lines() {
        for key in line?.chars().filter(|key| !key.is_whitespace()) {
            sender.blocking_send(key).map_err(|_| InputError::Closed)?;
        }
    }
    Ok(())
}
