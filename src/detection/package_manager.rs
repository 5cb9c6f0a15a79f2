//! Package manager selection.
//!
//! An install lists one command set per package manager. The first manager
//! (in declaration order) whose binary is on PATH is the one that runs.

use crate::config::schema::{ManagerCommands, PackageManagers};
use crate::environment::Probe;

/// Pick the first declared manager present on the host.
///
/// Returns `None` when no candidate is installed; the caller then skips the
/// install entirely.
pub fn select_manager<'a>(
    candidates: &'a PackageManagers,
    probe: &dyn Probe,
) -> Option<&'a ManagerCommands> {
    let selected = candidates
        .iter()
        .find(|candidate| probe.binary_exists(&candidate.manager));

    match selected {
        Some(m) => tracing::debug!(manager = %m.manager, "selected package manager"),
        None => tracing::debug!(
            candidates = ?candidates.names(),
            "no compatible package manager"
        ),
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::OsKind;
    use std::cell::RefCell;

    struct Installed {
        binaries: Vec<&'static str>,
        probed: RefCell<Vec<String>>,
    }

    impl Installed {
        fn new(binaries: Vec<&'static str>) -> Self {
            Self {
                binaries,
                probed: RefCell::new(Vec::new()),
            }
        }
    }

    impl Probe for Installed {
        fn binary_exists(&self, name: &str) -> bool {
            self.probed.borrow_mut().push(name.to_string());
            self.binaries.contains(&name)
        }
        fn path_exists(&self, _path: &str) -> bool {
            false
        }
        fn os_matches(&self, _kind: OsKind) -> bool {
            false
        }
    }

    fn managers(names: &[&str]) -> PackageManagers {
        PackageManagers::new(
            names
                .iter()
                .map(|n| (n.to_string(), vec![format!("{} install thing", n)])),
        )
    }

    #[test]
    fn picks_first_present_in_declared_order() {
        let candidates = managers(&["pacman", "apt", "brew"]);
        let probe = Installed::new(vec!["brew", "apt"]);

        let selected = select_manager(&candidates, &probe).unwrap();

        assert_eq!(selected.manager, "apt");
        assert_eq!(selected.commands, vec!["apt install thing".to_string()]);
    }

    #[test]
    fn stops_probing_after_match() {
        let candidates = managers(&["apt", "dnf", "zypper"]);
        let probe = Installed::new(vec!["apt", "dnf"]);

        select_manager(&candidates, &probe);

        assert_eq!(*probe.probed.borrow(), vec!["apt".to_string()]);
    }

    #[test]
    fn none_when_no_manager_present() {
        let candidates = managers(&["apk", "zypper"]);
        let probe = Installed::new(vec!["brew"]);

        assert!(select_manager(&candidates, &probe).is_none());
    }

    #[test]
    fn none_for_empty_mapping() {
        let probe = Installed::new(vec!["apt"]);
        assert!(select_manager(&PackageManagers::default(), &probe).is_none());
    }

    #[test]
    fn unknown_manager_names_are_probed_as_binaries() {
        let candidates = managers(&["nix-env"]);
        let probe = Installed::new(vec!["nix-env"]);

        assert_eq!(
            select_manager(&candidates, &probe).map(|m| m.manager.as_str()),
            Some("nix-env")
        );
    }
}
