//! Tests for the async in-memory contact repository.

use contact_manager::{ContactRepository, InMemoryContactRepository, NewContact};
use std::sync::Arc;

fn sample_contact(phone: &str) -> NewContact {
    NewContact::new("Suyog", "Patil", phone)
}

#[tokio::test]
async fn test_repository_add_and_list() {
    let repo = InMemoryContactRepository::new();
    assert!(repo.get_all_contacts().await.is_empty());

    let added = repo.add_contact(sample_contact("8329763258")).await.unwrap();
    assert_eq!(added.phone_number(), "8329763258");

    let contacts = repo.get_all_contacts().await;
    assert_eq!(contacts, vec![added]);
}

#[tokio::test]
async fn test_repository_rejects_invalid_contact() {
    let repo = InMemoryContactRepository::new();
    let input = NewContact {
        phone_number: None,
        ..sample_contact("")
    };

    assert!(repo.add_contact(input).await.is_err());
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_repository_as_trait_object() {
    let repo: Arc<dyn ContactRepository> = Arc::new(InMemoryContactRepository::new());
    repo.add_contact(sample_contact("1023456789")).await.unwrap();
    repo.add_contact(sample_contact("1023456789")).await.unwrap();

    assert_eq!(repo.count().await, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_all_land() {
    let repo = InMemoryContactRepository::new();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                let input = if i % 5 == 0 {
                    NewContact::new("Suyog", "", "8329763258")
                } else {
                    sample_contact(&format!("{:010}", i))
                };
                repo.add_contact(input).await.is_ok()
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 40);
    assert_eq!(repo.count().await, 40);

    let contacts = repo.get_all_contacts().await;
    assert!(contacts.iter().all(|c| !c.last_name().is_empty()));
}
