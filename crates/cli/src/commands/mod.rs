pub mod send;
pub mod translate;

use std::io::Read;
use std::path::Path;

use courier_mail::Message;

/// Read and parse a message from `path`, or from stdin when `path` is `-`.
pub fn load_message(path: &Path) -> anyhow::Result<Message> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path)?
    };
    Ok(Message::parse(&raw)?)
}
