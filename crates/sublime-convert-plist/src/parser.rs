//! Event-driven reader building a [`Node`] tree from XML text.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{PlistError, Result};
use crate::node::Node;

/// An element that has been opened but not yet closed.
struct Frame {
    tag: String,
    text: Option<String>,
    children: Vec<Node>,
}

impl Frame {
    fn new(tag: String) -> Self {
        Self {
            tag,
            text: None,
            children: Vec::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    fn finish(self) -> Node {
        Node::from_element(self.tag, self.text, self.children)
    }
}

/// Parses an XML property list into its root [`Node`].
///
/// The root is usually `Node::Other { tag: "plist", .. }`. Declarations,
/// doctypes, comments and processing instructions are skipped, and
/// whitespace between elements is dropped.
///
/// # Errors
///
/// Returns [`PlistError`] for malformed XML, unbalanced tags, content outside
/// the root element, or a document with no elements.
pub fn parse(xml: &str) -> Result<Node> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        let event = reader.read_event().map_err(|source| PlistError::Xml {
            position: reader.error_position() as u64,
            source,
        })?;

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(PlistError::OutsideRoot {
                        position: reader.buffer_position() as u64,
                    });
                }
                let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                stack.push(Frame::new(tag));
            }
            Event::Empty(empty) => {
                let tag = String::from_utf8_lossy(empty.name().as_ref()).into_owned();
                let node = Frame::new(tag).finish();
                attach(&mut stack, &mut root, node, reader.buffer_position() as u64)?;
            }
            Event::End(end) => {
                let frame = stack.pop().ok_or_else(|| PlistError::UnexpectedClose {
                    tag: String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                })?;
                attach(
                    &mut stack,
                    &mut root,
                    frame.finish(),
                    reader.buffer_position() as u64,
                )?;
            }
            Event::Text(text) => {
                let position = reader.buffer_position() as u64;
                let text = text.unescape().map_err(|source| PlistError::Xml {
                    position,
                    source: source.into(),
                })?;
                match stack.last_mut() {
                    Some(frame) => frame.push_text(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(PlistError::OutsideRoot { position }),
                }
            }
            Event::CData(cdata) => {
                let position = reader.buffer_position() as u64;
                let bytes = cdata.into_inner();
                match stack.last_mut() {
                    Some(frame) => frame.push_text(&String::from_utf8_lossy(&bytes)),
                    None => return Err(PlistError::OutsideRoot { position }),
                }
            }
            Event::Eof => break,
            // Declarations, doctypes, comments and processing instructions.
            _ => {}
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(PlistError::Unclosed { tag: frame.tag });
    }
    root.ok_or(PlistError::Empty)
}

/// Hands a finished node to its parent, or makes it the root.
fn attach(
    stack: &mut [Frame],
    root: &mut Option<Node>,
    node: Node,
    position: u64,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => return Err(PlistError::OutsideRoot { position }),
    }
    Ok(())
}
