//! In memory stand-ins for the outbound ports

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    model::{ObjectLocation, registration::Registration},
    ports::{ObjectStore, RegistrationTable},
};

#[derive(Default)]
pub struct InMemoryObjects {
    objects: HashMap<ObjectLocation, Vec<u8>>,
}

impl InMemoryObjects {
    pub fn with_object(mut self, bucket: &str, key: &str, content: impl Into<Vec<u8>>) -> Self {
        self.objects.insert(
            ObjectLocation {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            content.into(),
        );
        self
    }
}

impl ObjectStore for InMemoryObjects {
    async fn get_object(&self, location: &ObjectLocation) -> anyhow::Result<Vec<u8>> {
        self.objects
            .get(location)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("NoSuchKey: {}", location.key))
    }
}

/// Mirrors PutItem: unconditional, keyed by id
#[derive(Default)]
pub struct InMemoryRegistrations {
    items: Mutex<HashMap<String, Registration>>,
    puts: AtomicUsize,
}

impl InMemoryRegistrations {
    pub fn get(&self, id: &str) -> Option<Registration> {
        self.items.lock().ok()?.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or_default()
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

impl RegistrationTable for InMemoryRegistrations {
    async fn put_registration(&self, registration: &Registration) -> anyhow::Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.items
            .lock()
            .map_err(|_| anyhow::anyhow!("registrations lock poisoned"))?
            .insert(registration.id.clone(), registration.clone());
        Ok(())
    }
}
