use core::fmt::{self, Display, Formatter};
use smallvec::{smallvec, SmallVec};

// Deep enough for most trees to stay off the heap.
type Segments = SmallVec<[usize; 8]>;

/// The position of a node relative to the root, used as its synthetic identity.
///
/// The root occupies path `[0]`; the `i`-th child of a node at path `p` occupies `p + [i]`. Two
/// different tree positions therefore always have different paths, which is what lets the
/// engine key its per-traversal bookkeeping by path instead of by object identity.
///
/// Paths are cheap to clone and hash. `Display` joins the segments with `.`, so the root
/// renders as `0` and its second child as `0.1`.
///
/// # Example
/// ```rust
/// use canopy::traversal::TreePath;
///
/// let root = TreePath::root();
/// let grandchild = root.child(1).child(0);
/// assert_eq!(grandchild.to_string(), "0.1.0");
/// assert_eq!(grandchild.depth(), 2);
/// assert_eq!(grandchild.parent(), Some(root.child(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath(Segments);

impl TreePath {
    /// Returns the path of the root node, `[0]`.
    #[inline]
    pub fn root() -> Self {
        Self(smallvec![0])
    }
    /// Returns the path of this node's `index`-th child.
    #[inline]
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }
    /// Returns the path of this node's parent, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() > 1 {
            Some(Self(self.0[..self.0.len() - 1].into()))
        } else {
            None
        }
    }
    /// Returns the number of edges between this node and the root.
    ///
    /// A path always has `depth() + 1` segments.
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }
    /// Returns the index of this node among its siblings, or `None` for the root.
    #[inline]
    pub fn child_index(&self) -> Option<usize> {
        if self.0.len() > 1 {
            self.0.last().copied()
        } else {
            None
        }
    }
    /// Returns `true` if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }
    /// Returns the raw path segments.
    #[inline]
    pub fn segments(&self) -> &[usize] {
        &self.0
    }
}

impl Display for TreePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
