// src/candidates/tests/services_tests.rs

#[cfg(test)]
mod tests {
    use crate::candidates::services::CandidatesService;
    use crate::common::test_helpers::{experienced_input, fresher_input, memory_pool};
    use crate::common::ApiError;
    use std::collections::HashSet;

    async fn count_rows(service: &CandidatesService) -> usize {
        service.get_all_candidates().await.unwrap().len()
    }

    #[tokio::test]
    async fn test_create_returns_persisted_record() {
        let service = CandidatesService::new(memory_pool().await);

        let created = service.create_candidate(fresher_input("A")).await.unwrap();

        assert!(created.id.starts_with("C_"));
        assert_eq!(created.name, "A");
        assert_eq!(created.resume_url, "");
        assert!(!created.employee_referral);
        assert_eq!(created.employee_id, None);

        let fetched = service.get_candidate_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_created_ids_are_novel_and_listed() {
        let service = CandidatesService::new(memory_pool().await);

        let mut ids = HashSet::new();
        for i in 0..20 {
            let created = service
                .create_candidate(fresher_input(&format!("Candidate {}", i)))
                .await
                .unwrap();
            assert!(ids.insert(created.id));
        }

        let listed: HashSet<String> = service
            .get_all_candidates()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let service = CandidatesService::new(memory_pool().await);
        for name in ["first", "second", "third"] {
            service.create_candidate(fresher_input(name)).await.unwrap();
        }

        let names: Vec<String> = service
            .get_all_candidates()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_create_with_both_referrals_writes_nothing() {
        let service = CandidatesService::new(memory_pool().await);

        let mut input = fresher_input("A");
        input.employee_referral = true;
        input.employee_id = Some("E1".to_string());
        input.consultancy_referral = true;
        input.consultancy_name = Some("Acme".to_string());

        let result = service.create_candidate(input).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert_eq!(count_rows(&service).await, 0);
    }

    #[tokio::test]
    async fn test_create_drops_companion_of_unset_flag() {
        let service = CandidatesService::new(memory_pool().await);

        let mut input = fresher_input("A");
        input.employee_id = Some("E1".to_string());
        input.consultancy_referral = true;
        input.consultancy_name = Some("Acme".to_string());

        let created = service.create_candidate(input).await.unwrap();
        assert_eq!(created.employee_id, None);
        assert!(created.consultancy_referral);
        assert_eq!(created.consultancy_name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let service = CandidatesService::new(memory_pool().await);

        let mut original = fresher_input("A");
        original.remark = Some("first call".to_string());
        original.resume_url = "/uploads/K7NP3XQ2_cv.pdf".to_string();
        let created = service.create_candidate(original).await.unwrap();

        let mut replacement = experienced_input("A. Person", "Pune", "3-5");
        replacement.employee_referral = true;
        replacement.employee_id = Some("E42".to_string());

        let updated = service
            .update_candidate(&created.id, replacement)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "A. Person");
        assert_eq!(updated.location, "Pune");
        assert_eq!(updated.years_experience, "3-5");
        assert_eq!(updated.remark, None);
        assert_eq!(updated.resume_url, "");
        assert!(updated.employee_referral);
        assert_eq!(updated.employee_id.as_deref(), Some("E42"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_clears_companion_when_flag_turned_off() {
        let service = CandidatesService::new(memory_pool().await);

        let mut input = fresher_input("A");
        input.employee_referral = true;
        input.employee_id = Some("E1".to_string());
        let created = service.create_candidate(input.clone()).await.unwrap();

        input.employee_referral = false;
        let updated = service.update_candidate(&created.id, input).await.unwrap();

        assert!(!updated.employee_referral);
        assert_eq!(updated.employee_id, None);
    }

    #[tokio::test]
    async fn test_repeated_update_is_idempotent() {
        let service = CandidatesService::new(memory_pool().await);
        let created = service.create_candidate(fresher_input("A")).await.unwrap();

        let replacement = experienced_input("B", "Y", "2");
        let first = service
            .update_candidate(&created.id, replacement.clone())
            .await
            .unwrap();
        let second = service
            .update_candidate(&created.id, replacement)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(service.get_candidate_by_id(&created.id).await.unwrap(), second);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = CandidatesService::new(memory_pool().await);

        let result = service
            .update_candidate("C_MISSING0", fresher_input("A"))
            .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert_eq!(count_rows(&service).await, 0);
    }

    #[tokio::test]
    async fn test_update_rejects_both_referrals() {
        let service = CandidatesService::new(memory_pool().await);
        let created = service.create_candidate(fresher_input("A")).await.unwrap();

        let mut input = fresher_input("A");
        input.employee_referral = true;
        input.employee_id = Some("E1".to_string());
        input.consultancy_referral = true;
        input.consultancy_name = Some("Acme".to_string());

        let result = service.update_candidate(&created.id, input).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert_eq!(service.get_candidate_by_id(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let service = CandidatesService::new(memory_pool().await);
        let keep = service.create_candidate(fresher_input("keep")).await.unwrap();
        let gone = service.create_candidate(fresher_input("gone")).await.unwrap();

        service.delete_candidate(&gone.id).await.unwrap();

        let remaining = service.get_all_candidates().await.unwrap();
        assert_eq!(remaining, vec![keep]);
        assert!(matches!(
            service.get_candidate_by_id(&gone.id).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_storage_unchanged() {
        let service = CandidatesService::new(memory_pool().await);
        service.create_candidate(fresher_input("A")).await.unwrap();
        let before = service.get_all_candidates().await.unwrap();

        let result = service.delete_candidate("C_MISSING0").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert_eq!(service.get_all_candidates().await.unwrap(), before);
    }
}
