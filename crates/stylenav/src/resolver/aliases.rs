//! Alias-prefixed specifiers (`@/styles/x.module.css`, `~ui/button`).

use std::borrow::Cow;
use std::path::PathBuf;

use path_clean::PathClean;

use super::extensions::{has_module_suffix, module_candidates};
use super::ImportResolver;
use crate::aliases::AliasMap;

/// Rewrite `@name/...` to `@/name/...`.
///
/// Projects that alias `@/*` are often imported as `@components/x`; the
/// rewrite lets those imports match the `@/` entry. `@/...` and a bare `@`
/// are returned unchanged.
pub fn normalize_scope_shorthand(specifier: &str) -> Cow<'_, str> {
    match specifier.strip_prefix('@') {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Cow::Owned(format!("@/{rest}")),
        _ => Cow::Borrowed(specifier),
    }
}

impl ImportResolver<'_> {
    /// Try every alias whose prefix matches, longest alias first.
    pub(super) fn resolve_aliased(&self, specifier: &str, aliases: &AliasMap) -> Option<PathBuf> {
        let specifier = normalize_scope_shorthand(specifier);

        for (alias, target) in aliases.by_specificity() {
            let prefix = if alias.ends_with('/') {
                Cow::Borrowed(alias)
            } else {
                Cow::Owned(format!("{alias}/"))
            };
            let Some(suffix) = specifier.strip_prefix(&*prefix) else {
                continue;
            };

            let candidate = target.join(suffix).clean();
            if self.probe(&candidate) {
                return Some(candidate);
            }
            if has_module_suffix(&candidate) {
                continue;
            }
            if let Some(found) = self.first_existing(module_candidates(&candidate)) {
                return Some(found);
            }
        }

        None
    }
}
