//! AddPracticeUseCase - append a practice under Module > Subtopic

use crate::application::ports::DocumentRepository;
use crate::domain::entities::{Practice, RoadmapDocument};
use crate::domain::errors::DomainError;

use super::EditError;

/// Use case for adding a new pending practice
pub struct AddPracticeUseCase<'a, R: DocumentRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> AddPracticeUseCase<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Add `practice` to the subtopic named `subtopic` of the first regular
    /// module whose name contains `module_query`
    pub fn execute(
        &self,
        module_query: &str,
        subtopic: &str,
        practice: &str,
    ) -> Result<RoadmapDocument, EditError> {
        let practice = practice.trim();
        if practice.is_empty() {
            return Err(DomainError::ValidationError("practice name is empty".to_string()).into());
        }

        let mut document = self.repository.load()?;

        let module = document
            .find_module_mut(module_query)
            .ok_or_else(|| DomainError::NotFound(format!("module '{}'", module_query)))?;
        let module_name = module.name.clone();

        let target = module
            .subtopics_mut()
            .iter_mut()
            .find(|s| s.name == subtopic)
            .ok_or_else(|| {
                DomainError::NotFound(format!("subtopic '{}' in '{}'", subtopic, module_name))
            })?;

        target.practices.push(Practice::pending(practice));
        self.repository.save(&document)?;

        crate::log!(
            "Added practice '{}' to {} > {}",
            practice,
            module_name,
            subtopic
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::document_port::testing::MemoryRepository;
    use crate::domain::entities::roadmap::tests::sample_document;

    #[test]
    fn test_add_practice_appends_in_order() {
        let repo = MemoryRepository::new(sample_document());
        let doc = AddPracticeUseCase::new(&repo)
            .execute("Semana 1", "Ownership", "P3")
            .unwrap();

        let practices = &doc.modules[1].subtopics()[0].practices;
        assert_eq!(practices.len(), 3);
        assert_eq!(practices[2], Practice::pending("P3"));
        assert_eq!(repo.saves.get(), 1);
        assert_eq!(*repo.document.borrow(), doc);
    }

    #[test]
    fn test_add_practice_unknown_targets() {
        let repo = MemoryRepository::new(sample_document());
        let use_case = AddPracticeUseCase::new(&repo);

        assert!(matches!(
            use_case.execute("FASE 1", "Ownership", "x"),
            Err(EditError::Domain(DomainError::NotFound(_)))
        ));
        assert!(matches!(
            use_case.execute("Semana 1", "Borrowing", "x"),
            Err(EditError::Domain(DomainError::NotFound(_)))
        ));
        assert!(matches!(
            use_case.execute("Semana 1", "Ownership", "   "),
            Err(EditError::Domain(DomainError::ValidationError(_)))
        ));
        assert_eq!(repo.saves.get(), 0);
    }
}
