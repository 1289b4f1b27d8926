//! Relay mutation constructor codemod.
//!
//! Rewrites
//!
//! ```javascript
//! class LikeMutation extends Relay.Mutation {
//!   constructor(props) {
//!     super(props);
//!     this.x = 1;
//!   }
//! }
//! ```
//!
//! into a `didReceiveProps() { this.x = 1; }` method, for every constructor
//! whose class extends a base imported from Relay and whose parameter is used
//! only in the leading `super(props)` call.
//!
//! - `references`: variable references versus property-name positions
//! - `bindings`: the local name of an imported module
//! - `matcher`: constructors of classes with a given superclass
//! - `eligibility`: the checks a constructor must pass
//! - `rewriter`: the tree edit
//! - `driver`: per-file orchestration and the toolkit round trip

pub mod bindings;
pub use bindings::{Binding, resolve_import_binding};

pub mod driver;
pub use driver::{
    MUTATION_FAMILIES, MutationFamily, RewrittenConstructor, TransformOutcome, TransformedSource,
    run_transform, transform_source, transform_tree,
};

pub mod eligibility;
pub use eligibility::{EligibilityVerdict, SkipReason, check_eligibility};

pub mod matcher;
pub use matcher::{BaseClassDescriptor, Candidate, find_matching_constructors};

pub mod references;
pub use references::{find_variable_references, is_variable_reference};

pub mod rewriter;
pub use rewriter::{NEW_METHOD_NAME, rewrite_constructor};
