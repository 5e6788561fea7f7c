//! Line oriented address output.

use std::io::{self, Write};
use std::net::Ipv4Addr;

/// Write each address on its own line and flush.
///
/// Returns the number of addresses written. A reader that goes away early
/// (`cidr2ips ... | head`) stops the output without an error.
pub fn write_addresses<W, I>(out: &mut W, addrs: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Ipv4Addr>,
{
    let mut count = 0u64;
    for ip in addrs {
        if let Err(e) = writeln!(out, "{ip}") {
            return broken_pipe_ok(e, count);
        }
        count += 1;
    }
    if let Err(e) = out.flush() {
        return broken_pipe_ok(e, count);
    }
    log::debug!("wrote {count} addresses");
    Ok(count)
}

fn broken_pipe_ok(e: io::Error, count: u64) -> io::Result<u64> {
    if e.kind() == io::ErrorKind::BrokenPipe {
        log::debug!("output closed after {count} addresses");
        Ok(count)
    } else {
        Err(e)
    }
}
