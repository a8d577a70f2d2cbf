//! Project and module model.
//! A module is a top-level directory of the project base; its root path is
//! the deterministic join of base path and module name. The project's own
//! implicit root module (a directory named like the project) is excluded
//! from enumeration, as are hidden directories.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One organizational unit of a project with its own root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
    root: PathBuf,
}

impl Module {
    pub fn new(name: impl Into<String>, base: &Path) -> Self {
        let name = name.into();
        let root = base.join(&name);
        Self { name, root }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Module root path: project base joined with the module name.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `path` lives under this module's root.
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.root)
    }
}

/// A project base directory together with its enumerated modules.
#[derive(Debug, Clone)]
pub struct Project {
    base: PathBuf,
    name: String,
    modules: Vec<Module>,
}

impl Project {
    /// Enumerate modules by listing the top-level directories of `base`,
    /// skipping hidden entries and the implicit root module (a directory
    /// whose name equals the project name).
    pub fn discover(base: &Path) -> Result<Self> {
        if !base.is_dir() {
            bail!("Project base is not a directory: {}", base.display());
        }
        let name = base
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let mut modules = Vec::new();
        let entries = fs::read_dir(base)
            .with_context(|| format!("read project base '{}'", base.display()))?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Ok(dir_name) = entry.file_name().into_string() else {
                continue;
            };
            if dir_name.starts_with('.') || dir_name == name {
                continue;
            }
            modules.push(Module::new(dir_name, base));
        }
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(base = %base.display(), count = modules.len(), "enumerated modules");

        Ok(Self {
            base: base.to_path_buf(),
            name,
            modules,
        })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// The module whose root is a prefix of `path`, if any.
    pub fn module_of(&self, path: &Path) -> Option<&Module> {
        self.modules.iter().find(|m| m.contains(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn module_root_is_base_plus_name() {
        let m = Module::new("core", Path::new("/work/proj"));
        assert_eq!(m.root(), Path::new("/work/proj/core"));
        assert!(m.contains(Path::new("/work/proj/core/res/values/strings.xml")));
        assert!(!m.contains(Path::new("/work/proj/app/res/values/strings.xml")));
    }

    #[test]
    fn discover_skips_hidden_files_and_root_module() {
        let td = tempdir().unwrap();
        let base = td.path().join("myproj");
        fs::create_dir_all(base.join("app")).unwrap();
        fs::create_dir_all(base.join("core")).unwrap();
        fs::create_dir_all(base.join(".git")).unwrap();
        fs::create_dir_all(base.join("myproj")).unwrap(); // implicit root module
        fs::write(base.join("settings.txt"), "x").unwrap();

        let project = Project::discover(&base).unwrap();
        let names: Vec<_> = project.modules().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["app", "core"]);
    }

    #[test]
    fn module_of_picks_the_containing_module() {
        let td = tempdir().unwrap();
        let base = td.path().join("p");
        fs::create_dir_all(base.join("app")).unwrap();
        fs::create_dir_all(base.join("core")).unwrap();
        let project = Project::discover(&base).unwrap();

        let inside = base.join("core").join("res").join("drawable").join("a.png");
        assert_eq!(project.module_of(&inside).unwrap().name(), "core");
        assert!(project.module_of(Path::new("/elsewhere/x")).is_none());
    }
}
