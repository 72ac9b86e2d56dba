//! `./` and `../` specifiers.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use super::extensions::{extension_variants, module_candidates, names_module_file};
use super::ImportResolver;

impl ImportResolver<'_> {
    /// Resolve a relative specifier against `current_dir`.
    ///
    /// With `lenient_relative`, a missed `../rest` is retried as `./rest`
    /// and as `rest`, both against `current_dir`.
    pub(super) fn resolve_relative(&self, specifier: &str, current_dir: &Path) -> Option<PathBuf> {
        let explicit = names_module_file(specifier);
        let base = current_dir.join(specifier).clean();
        if let Some(found) = self.try_relative(&base, explicit) {
            return Some(found);
        }

        if !self.options.lenient_relative {
            return None;
        }
        let rest = specifier.strip_prefix("../")?;

        let mut tried = vec![base];
        for rewritten in [format!("./{rest}"), rest.to_string()] {
            let base = current_dir.join(&rewritten).clean();
            if tried.contains(&base) {
                continue;
            }
            if let Some(found) = self.try_relative(&base, explicit) {
                self.observer.lenient_fallback(specifier, &rewritten, &found);
                return Some(found);
            }
            tried.push(base);
        }

        None
    }

    /// Probe one resolved base path.
    ///
    /// `explicit` is set when the specifier itself names a `.module.` file:
    /// the path is tried as-is, then with its style extension swapped.
    /// Otherwise the module suffixes and the directory index are tried.
    fn try_relative(&self, base: &Path, explicit: bool) -> Option<PathBuf> {
        if explicit {
            if self.probe(base) {
                return Some(base.to_path_buf());
            }
            self.first_existing(extension_variants(base))
        } else {
            self.first_existing(module_candidates(base))
        }
    }
}
