//! # Story compartida
//! src/story.rs
//!
//! Secuencia de líneas de texto que solo crece. Vive lo que vive el
//! proceso y no se persiste. Todas las operaciones toman el mismo lock,
//! así que un append seguido de snapshot nunca ve líneas intercaladas
//! de otra conexión.

use std::sync::{Mutex, PoisonError};

/// Secuencia append-only de líneas
#[derive(Debug, Default)]
pub struct Story {
    lines: Mutex<Vec<String>>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega una línea y retorna la secuencia completa resultante
    pub fn append_and_snapshot(&self, line: &str) -> Vec<String> {
        let mut lines = self.lock();
        lines.push(line.to_string());
        lines.clone()
    }

    /// Copia de todas las líneas en orden de inserción
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().clone()
    }

    // Un panic a mitad de un push no deja el Vec inconsistente
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_story_is_empty() {
        let story = Story::new();
        assert!(story.snapshot().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let story = Story::new();
        story.append_and_snapshot("Hello");
        story.append_and_snapshot("World");

        assert_eq!(story.snapshot(), vec!["Hello", "World"]);
    }

    #[test]
    fn test_append_and_snapshot() {
        let story = Story::new();
        story.append_and_snapshot("first");
        let lines = story.append_and_snapshot("second");

        assert_eq!(lines, vec!["first", "second"]);
        assert_eq!(story.snapshot().len(), 2);
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let story = Arc::new(Story::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let story = Arc::clone(&story);
                thread::spawn(move || {
                    for i in 0..50 {
                        story.append_and_snapshot(&format!("{}-{}", t, i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let lines = story.snapshot();
        assert_eq!(lines.len(), 200);

        // Dentro de cada thread el orden se mantiene
        let from_zero: Vec<_> = lines.iter().filter(|l| l.starts_with("0-")).collect();
        let expected: Vec<String> = (0..50).map(|i| format!("0-{}", i)).collect();
        assert_eq!(from_zero, expected.iter().collect::<Vec<_>>());
    }
}
