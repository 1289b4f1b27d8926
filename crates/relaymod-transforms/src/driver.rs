//! Per-file orchestration: bindings → candidates → checks → rewrites.

use relaymod_ast::{AstError, NodeIndex, PrintOptions, SyntaxToolkit, SyntaxTree};
use relaymod_common::Diagnostic;
use tracing::{debug, info_span, warn};

use crate::bindings::resolve_import_binding;
use crate::eligibility::{EligibilityVerdict, check_eligibility};
use crate::matcher::{BaseClassDescriptor, find_matching_constructors};
use crate::rewriter::rewrite_constructor;

/// A base class that Relay mutations extend, and the modules that provide it.
#[derive(Clone, Copy, Debug)]
pub struct MutationFamily {
    pub name: &'static str,
    /// Module names accepted in `require(...)` / `import ... from`.
    pub modules: &'static [&'static str],
    /// `Some(member)` when the class extends `<binding>.<member>`, `None`
    /// when it extends the binding itself.
    pub member: Option<&'static str>,
}

impl MutationFamily {
    pub fn descriptor(&self, local_name: &str) -> BaseClassDescriptor {
        match self.member {
            Some(member) => BaseClassDescriptor::Member {
                namespace: local_name.to_string(),
                member: member.to_string(),
            },
            None => BaseClassDescriptor::Identifier(local_name.to_string()),
        }
    }
}

/// Recognized families, processed in this order.
pub const MUTATION_FAMILIES: [MutationFamily; 2] = [
    MutationFamily {
        name: "Relay.Mutation",
        modules: &["react-relay", "Relay"],
        member: Some("Mutation"),
    },
    MutationFamily {
        name: "RelayMutation",
        modules: &["RelayMutation"],
        member: None,
    },
];

/// A constructor that was turned into `didReceiveProps`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewrittenConstructor {
    pub family: &'static str,
    pub method: NodeIndex,
    pub param_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformOutcome {
    /// At least one constructor was rewritten.
    pub changed: bool,
    pub rewritten: Vec<RewrittenConstructor>,
    /// Skip diagnostics, in candidate order per family.
    pub skipped: Vec<Diagnostic>,
}

/// Rewrite every eligible mutation constructor of `tree`.
///
/// Each family's candidates are all checked before the first of them is
/// rewritten. An error leaves the families processed so far rewritten.
pub fn transform_tree(tree: &mut SyntaxTree, file_name: &str) -> Result<TransformOutcome, AstError> {
    let _span = info_span!("transform_file", file = %file_name).entered();
    let mut outcome = TransformOutcome::default();

    for family in &MUTATION_FAMILIES {
        let Some(binding) = resolve_import_binding(tree, family.modules) else {
            continue;
        };
        let descriptor = family.descriptor(&binding.local_name);
        let candidates = find_matching_constructors(tree, &descriptor);
        debug!(
            family = family.name,
            binding = %binding.local_name,
            candidates = candidates.len(),
            "matched mutation constructors"
        );

        let mut eligible = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match check_eligibility(tree, &candidate)? {
                EligibilityVerdict::Eligible { param_name } => eligible.push((candidate, param_name)),
                EligibilityVerdict::Skipped { reason, position } => {
                    let diagnostic = reason.to_diagnostic(file_name, position);
                    warn!(family = family.name, code = diagnostic.code, "{diagnostic}");
                    outcome.skipped.push(diagnostic);
                }
            }
        }

        for (candidate, param_name) in eligible {
            rewrite_constructor(tree, &candidate)?;
            outcome.changed = true;
            outcome.rewritten.push(RewrittenConstructor {
                family: family.name,
                method: candidate.constructor,
                param_name,
            });
        }
    }

    debug!(
        rewritten = outcome.rewritten.len(),
        skipped = outcome.skipped.len(),
        "transform finished"
    );
    Ok(outcome)
}

/// Result of transforming one source text.
#[derive(Clone, Debug)]
pub struct TransformedSource {
    /// The printed tree, `None` when nothing was rewritten.
    pub output: Option<String>,
    pub outcome: TransformOutcome,
}

/// Parse `source`, transform it and print it again if anything changed.
pub fn transform_source(
    toolkit: &dyn SyntaxToolkit,
    file_name: &str,
    source: &str,
    options: &PrintOptions,
) -> Result<TransformedSource, AstError> {
    let mut tree = toolkit.parse(source)?;
    debug!(file = %file_name, toolkit = toolkit.name(), nodes = tree.len(), "parsed source");
    let outcome = transform_tree(&mut tree, file_name)?;
    let output = if outcome.changed {
        Some(toolkit.print(&tree, options)?)
    } else {
        None
    };
    Ok(TransformedSource { output, outcome })
}

/// [`transform_source`] without the outcome: the new text, or `None` when
/// the file is unchanged.
pub fn run_transform(
    toolkit: &dyn SyntaxToolkit,
    file_name: &str,
    source: &str,
    options: &PrintOptions,
) -> Result<Option<String>, AstError> {
    transform_source(toolkit, file_name, source, options).map(|transformed| transformed.output)
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod driver_tests;
