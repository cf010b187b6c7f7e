use crate::Body;
use cgmath::Vector2;

/// The live bodies, in insertion order.
///
/// Point queries resolve overlaps by taking the first hit in this order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    bodies: Vec<Body>,
}
impl Registry {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&mut self, body: Body) {
        self.bodies.push(body);
    }
    /// Removes the first entry equal to `body`, if any.
    pub fn remove(&mut self, body: &Body) -> Option<Body> {
        let index = self.bodies.iter().position(|b| b == body)?;
        Some(self.bodies.remove(index))
    }
    /// Removes the first body containing `point`, if any.
    pub fn remove_at(&mut self, point: Vector2<f64>) -> Option<Body> {
        let index = self.position_at(point)?;
        Some(self.bodies.remove(index))
    }
    pub fn find_at(&self, point: Vector2<f64>) -> Option<&Body> {
        self.bodies.iter().find(|b| b.contains(point))
    }
    pub fn find_at_mut(&mut self, point: Vector2<f64>) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.contains(point))
    }
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }
    pub fn len(&self) -> usize {
        self.bodies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
    fn position_at(&self, point: Vector2<f64>) -> Option<usize> {
        self.bodies.iter().position(|b| b.contains(point))
    }
    pub(crate) fn bodies_mut(&mut self) -> &mut Vec<Body> {
        &mut self.bodies
    }
}
impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl FromIterator<Body> for Registry {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;

    fn body(x: f64, y: f64, radius: f64) -> Body {
        Body::new(Vector2::new(x, y), Vector2::zero(), radius)
    }

    #[test]
    fn remove_is_a_noop_for_absent_bodies() {
        let mut registry: Registry = [body(0.0, 0.0, 5.0)].into_iter().collect();
        assert_eq!(registry.remove(&body(1.0, 1.0, 5.0)), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_takes_only_the_first_duplicate() {
        let twin = body(0.0, 0.0, 5.0);
        let mut registry: Registry = [twin, body(9.0, 9.0, 5.0), twin].into_iter().collect();
        assert_eq!(registry.remove(&twin), Some(twin));
        let left: Vec<_> = registry.iter().copied().collect();
        assert_eq!(left, vec![body(9.0, 9.0, 5.0), twin]);
    }

    #[test]
    fn find_at_prefers_registry_order() {
        let registry: Registry = [body(0.0, 0.0, 10.0), body(5.0, 0.0, 10.0)]
            .into_iter()
            .collect();
        let hit = registry.find_at(Vector2::new(4.0, 0.0)).copied();
        assert_eq!(hit, Some(body(0.0, 0.0, 10.0)));
        assert_eq!(registry.find_at(Vector2::new(100.0, 0.0)), None);
    }

    #[test]
    fn find_at_uses_the_circle_not_its_bounding_box() {
        let registry: Registry = [body(0.0, 0.0, 10.0)].into_iter().collect();
        assert!(registry.find_at(Vector2::new(9.0, 9.0)).is_none());
    }

    #[test]
    fn clear_empties() {
        let mut registry: Registry = (0..4).map(|i| body(f64::from(i) * 50.0, 0.0, 5.0)).collect();
        assert_eq!(registry.len(), 4);
        registry.clear();
        assert!(registry.is_empty());
    }
}
