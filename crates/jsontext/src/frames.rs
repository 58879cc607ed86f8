//! Container-frame stack: nesting kind, active member, and path rendering.

use core::fmt::Write as _;

/// The kind of an open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
    /// `new Name( ... )`
    Constructor,
}

/// One open container: its kind plus the member currently being produced.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub kind: ContainerKind,
    /// Property name of the member in flight (objects only).
    pub name: Option<String>,
    /// Index of the element in flight (arrays and constructors only).
    pub index: Option<usize>,
}

impl Frame {
    fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            name: None,
            index: None,
        }
    }
}

/// Explicit stack of open containers; its length is `Depth`.
#[derive(Debug, Default)]
pub(crate) struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, kind: ContainerKind) {
        self.frames.push(Frame::new(kind));
    }

    pub fn pop(&mut self) -> Option<ContainerKind> {
        self.frames.pop().map(|f| f.kind)
    }

    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Records the property name of the member about to be produced.
    pub fn set_property_name(&mut self, name: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.name = Some(name.to_owned());
        }
    }

    /// Marks the start of a new member in the enclosing container.
    pub fn begin_value(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            match frame.kind {
                ContainerKind::Array | ContainerKind::Constructor => {
                    frame.index = Some(frame.index.map_or(0, |i| i + 1));
                }
                ContainerKind::Object => {}
            }
        }
    }

    /// Renders the textual path of the member in flight, e.g. `a.b[0]`.
    ///
    /// Names containing `.`, quotes, backslashes, or control characters are
    /// rendered bracketed and quoted: `['a.b']`.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for frame in &self.frames {
            match frame.kind {
                ContainerKind::Object => {
                    if let Some(name) = &frame.name {
                        append_name(&mut out, name);
                    }
                }
                ContainerKind::Array | ContainerKind::Constructor => {
                    if let Some(index) = frame.index {
                        // write! to String cannot fail
                        let _ = write!(out, "[{index}]");
                    }
                }
            }
        }
        out
    }
}

fn needs_quoting(name: &str) -> bool {
    name.chars()
        .any(|c| matches!(c, '.' | '\'' | '"' | '\\' | '/') || c.is_control())
}

fn append_name(out: &mut String, name: &str) {
    if needs_quoting(name) {
        out.push_str("['");
        for c in name.chars() {
            match c {
                '\'' | '\\' => {
                    out.push('\\');
                    out.push(c);
                }
                _ => out.push(c),
            }
        }
        out.push_str("']");
    } else {
        if !out.is_empty() {
            out.push('.');
        }
        out.push_str(name);
    }
}
