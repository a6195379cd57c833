//! Handler trait and type erasure.
//!
//! # How handlers are stored
//!
//! The dispatcher holds handlers of *different* concrete types in a single
//! `HashMap<String, …>` and a single `Vec<…>`. Rust collections can only hold
//! one concrete type, so we use trait objects (`dyn ErasedHandler`) to hide
//! the concrete function type behind a common interface.
//!
//! The chain from user code to vtable call:
//!
//! ```text
//! fn home(req: &Request, res: &mut Response) { … }   ← user writes this
//!        ↓ app.route("/", home)
//! home.into_boxed_handler()                          ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(home))                          ← heap-allocated wrapper
//!        ↓  stored as BoxedHandler = Arc<dyn ErasedHandler>
//! handler.call(&req, &mut res)  at request time      ← one vtable dispatch
//! ```
//!
//! There is exactly one handler shape in this crate — middleware and route
//! handlers are the same capability: read the request, mutate the response,
//! return nothing. Handlers are synchronous; the dispatch core never
//! suspends.

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
/// External crates cannot usefully interact with this trait.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: &Request, res: &mut Response);
}

/// A heap-allocated, type-erased handler.
///
/// `Arc` gives cheap shared ownership, and `Send + Sync` lets a serving
/// adapter share the whole route table across threads — the table is
/// read-only once serving begins, so no locking is involved.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid handler or middleware function.
///
/// You never implement this yourself. It is automatically satisfied for any
/// function or closure with the signature:
///
/// ```text
/// fn name(req: &Request, res: &mut Response)
/// ```
///
/// The trait is **sealed** (via the private `Sealed` supertrait): only the
/// blanket impl below can satisfy it, which keeps the API surface stable.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

/// The sealing module. Because `Sealed` is private, external crates cannot
/// name it and therefore cannot implement `Handler` on their own types.
mod private {
    pub trait Sealed {}
}

impl<F> private::Sealed for F where F: Fn(&Request, &mut Response) + Send + Sync + 'static {}

impl<F> Handler for F
where
    F: Fn(&Request, &mut Response) + Send + Sync + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Newtype wrapper that holds a concrete handler `F` and implements
/// [`ErasedHandler`], bridging the typed world to the trait-object world.
struct FnHandler<F>(F);

impl<F> ErasedHandler for FnHandler<F>
where
    F: Fn(&Request, &mut Response) + Send + Sync,
{
    fn call(&self, req: &Request, res: &mut Response) {
        (self.0)(req, res);
    }
}
