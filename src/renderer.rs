//! Sinks for rendered trees.

use std::fmt::Display;
use std::io::Write;

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Sink for the trees produced by [`Component::view`](crate::Component::view).
///
/// [`render`](Self::render) is called once per applied reducer, receiving
/// the tree projected from the new model.
///
/// # Example
///
/// ```rust
/// use counter_clock::Renderer;
///
/// struct ConsoleRenderer;
///
/// impl Renderer<String> for ConsoleRenderer {
///     fn render(&mut self, tree: String) {
///         println!("{tree}");
///     }
/// }
/// ```
pub trait Renderer<Tree> {
    /// Render the given tree, replacing whatever was shown before.
    fn render(&mut self, tree: Tree);
}

impl<Tree, R> Renderer<Tree> for Box<R>
where
    R: Renderer<Tree> + ?Sized,
{
    fn render(&mut self, tree: Tree) {
        (**self).render(tree)
    }
}

/// Writes each tree's `Display` form to a byte sink.
///
/// Each frame is followed by a newline and flushed. Write failures are
/// logged and the frame is dropped; the next render tries again.
pub struct TerminalRenderer<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames written successfully.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<Tree: Display, W: Write> Renderer<Tree> for TerminalRenderer<W> {
    fn render(&mut self, tree: Tree) {
        let written = writeln!(self.out, "{tree}").and_then(|_| self.out.flush());
        match written {
            Ok(()) => self.frames += 1,
            Err(error) => tracing::warn!(%error, "failed to write frame"),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures every rendered tree for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage: hand one clone to the runtime and
/// keep another to inspect renders.
///
/// # Example
///
/// ```rust
/// use counter_clock::{Renderer, TestRenderer};
///
/// let renderer = TestRenderer::new();
/// let mut sink = renderer.clone();
/// sink.render("first");
///
/// assert_eq!(renderer.count(), 1);
/// renderer.with_renders(|renders| assert_eq!(renders[0], "first"));
/// ```
pub struct TestRenderer<Tree> {
    renders: Arc<Mutex<Vec<Tree>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Tree> Clone for TestRenderer<Tree> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Tree> Renderer<Tree> for TestRenderer<Tree> {
    fn render(&mut self, tree: Tree) {
        self.renders.lock().push(tree);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Tree> Default for TestRenderer<Tree> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Tree> TestRenderer<Tree> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// Holds the capture lock for the duration of `f`; do not render from
    /// inside it.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Tree>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Clone of the most recent render, if any.
    pub fn last(&self) -> Option<Tree>
    where
        Tree: Clone,
    {
        self.renders.lock().last().cloned()
    }
}
