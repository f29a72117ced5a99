/// The rendering collaborator that displays intensities.
///
/// A surface exposes one mutable intensity slot per node it displays. The
/// surface may hold nodes the cache has never seen; those slots are left
/// untouched.
pub trait RenderSurface<K> {
    /// Visit every (key, slot) pair currently on the surface.
    fn visit_slots(&mut self, visit: &mut dyn FnMut(&K, &mut f64));

    /// Ask the surface to redraw after its slots were written.
    fn request_redraw(&mut self);
}
