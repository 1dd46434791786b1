//! Single forward scan over normalized `.hhc` markup.
//!
//! Three markers drive the scan: `<ul>` pushes depth, `</ul>` pops it, and
//! `<object` (open-ended so attributes on the tag still match) delimits a
//! block holding the `name`/`local` params of one contents entry. No
//! backtracking, no tag tree — marker positions via `memmem` finders.

mod param;

use memchr::memmem::Finder;

const UL_OPEN: &str = "<ul>";
const UL_CLOSE: &str = "</ul>";
const OBJECT_OPEN: &str = "<object";
const OBJECT_CLOSE: &str = "</object>";

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Display text.
    pub name: String,
    /// Link target (the `local` param).
    pub local: String,
    /// Net count of open `<ul>` lists when the entry was found. Goes
    /// negative when close tags outnumber opens; the renderer clamps.
    pub depth: i32,
}

/// Walk `html` (already normalized) left to right and collect entries in
/// document order.
///
/// Malformed content is tolerated, never an error: an object block with no
/// `</object>` anywhere later ends the scan where it stands, and a block
/// missing either param is skipped without disturbing the rest.
pub fn parse(html: &str) -> Vec<Node> {
    let ul_open = Finder::new(UL_OPEN);
    let ul_close = Finder::new(UL_CLOSE);
    let object_open = Finder::new(OBJECT_OPEN);
    let object_close = Finder::new(OBJECT_CLOSE);

    let mut nodes = Vec::new();
    let mut depth = 0i32;
    let mut pos = 0usize;

    loop {
        let rest = &html[pos..];
        let open = ul_open.find(rest.as_bytes());
        let close = ul_close.find(rest.as_bytes());
        let object = object_open.find(rest.as_bytes());

        // Priority on (impossible) position ties: open, then close, then object
        if let Some(at) = open {
            if before(at, close) && before(at, object) {
                depth += 1;
                pos += at + UL_OPEN.len();
                continue;
            }
        }
        if let Some(at) = close {
            if open.map_or(true, |o| at <= o) && before(at, object) {
                depth -= 1;
                pos += at + UL_CLOSE.len();
                continue;
            }
        }
        if let Some(at) = object {
            // Close marker searched from the cursor, not from the open
            // marker. No close anywhere later → the rest of the document
            // is unparseable; keep what we have.
            let Some(close_at) = object_close.find(rest.as_bytes()) else {
                break;
            };
            let block_end = close_at + OBJECT_CLOSE.len();
            // get() rather than slicing: a stray `</object>` before the
            // open marker yields an inverted range
            if let Some(block) = rest.get(at..block_end) {
                let name = param::extract(block, "name");
                let local = param::extract(block, "local");
                if let (Some(name), Some(local)) = (name, local) {
                    if !name.is_empty() && !local.is_empty() {
                        nodes.push(Node { name, local, depth });
                    }
                }
            }
            pos += block_end;
            continue;
        }
        break;
    }

    nodes
}

fn before(at: usize, other: Option<usize>) -> bool {
    other.map_or(true, |o| at < o)
}
