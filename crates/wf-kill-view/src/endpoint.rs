//! Bound client endpoints

/// Every client object bound to the global, in bind order
///
/// Events are broadcast to all members, so there is no per-request routing.
#[derive(Debug)]
pub struct EndpointSet<E> {
    endpoints: Vec<E>,
}

impl<E> Default for EndpointSet<E> {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
        }
    }
}

impl<E: PartialEq> EndpointSet<E> {
    pub fn insert(&mut self, endpoint: E) {
        self.endpoints.push(endpoint);
    }

    /// Remove `endpoint` by identity. Removing an absent endpoint is a no-op.
    pub fn remove(&mut self, endpoint: &E) -> bool {
        let before = self.endpoints.len();
        self.endpoints.retain(|e| e != endpoint);
        self.endpoints.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
