//! # Acceso a archivos
//! src/assets.rs
//!
//! Colaborador de filesystem: listar el directorio de assets, leer las
//! dos páginas fijas y comprobar si una ruta existe. Los handlers solo
//! ven el trait [`AssetStore`], así los tests usan un fake en memoria.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Página con el placeholder `${links}`
pub const ROOT_PAGE: &str = "root.html";

/// Página de la imagen aleatoria
pub const RANDOM_PAGE: &str = "index.html";

/// Fuente de bytes para las rutas que tocan disco
pub trait AssetStore: Send + Sync {
    /// Nombres de las entradas del directorio de assets
    fn list(&self) -> io::Result<Vec<String>>;

    /// Contenido de un archivo del directorio de assets
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Si la ruta (relativa al directorio de trabajo) existe
    fn exists(&self, path: &str) -> bool;
}

/// Implementación sobre el filesystem real
#[derive(Debug, Clone)]
pub struct DiskAssets {
    root: PathBuf,
}

impl DiskAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for DiskAssets {
    fn list(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(name))
    }

    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.html"), "b").unwrap();
        fs::write(dir.path().join("a.html"), "a").unwrap();

        let assets = DiskAssets::new(dir.path());
        assert_eq!(assets.list().unwrap(), vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ROOT_PAGE), "<p>${links}</p>").unwrap();

        let assets = DiskAssets::new(dir.path());
        assert_eq!(assets.read(ROOT_PAGE).unwrap(), b"<p>${links}</p>");
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DiskAssets::new(dir.path());

        assert!(assets.read(RANDOM_PAGE).is_err());
    }

    #[test]
    fn test_list_missing_dir_is_error() {
        let assets = DiskAssets::new("/definitely/not/here");
        assert!(assets.list().is_err());
    }

    #[test]
    fn test_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("present.txt");
        fs::write(&file, "x").unwrap();

        let assets = DiskAssets::new(dir.path());
        assert!(assets.exists(file.to_str().unwrap()));
        assert!(!assets.exists(dir.path().join("absent.txt").to_str().unwrap()));
    }
}
