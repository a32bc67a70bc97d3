//! A generic, Fibonacci-balanced rope.
//!
//! A rope represents a long logical sequence of elements as a balanced
//! binary concatenation tree whose leaves each hold a contiguous run. This
//! crate is generic over two things: the run representation itself
//! ([`Seq`]) and an opaque memory-accounting context threaded through every
//! allocation and release ([`MemCtx`]). Indexed access, append, prepend,
//! insert, remove and extract are all supported, and the tree is kept
//! balanced by the classic Boehm/Atkinson/Plass Fibonacci invariant.
//!
//! For more information on ropes in general, see:
//!
//! + <http://scienceblogs.com/goodmath/2009/01/26/ropes-twining-together-strings/>
//! + <https://www.ibm.com/developerworks/library/j-ropes/>
//! + <http://citeseer.ist.psu.edu/viewdoc/download?doi=10.1.1.14.9450&rep=rep1&type=pdf>

mod error;
mod forest;
mod iter;
mod mem;
mod node;
mod rope;
mod seq;
mod split;


pub use error::{Error, Result};
pub use iter::RopeIter;
pub use mem::{CountingMemCtx, MemCtx, NopMemCtx};
pub use rope::Rope;
pub use seq::Seq;
