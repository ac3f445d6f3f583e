use crate::Trajectory;

/// Consumes a finished trajectory to produce a visual artifact.
///
/// A renderer is the collaborator behind `Model::draw`: it decides whether the
/// samples end up in a window, a file, or a terminal. It is only ever handed a
/// non-empty trajectory.
pub trait Renderer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Renders the trajectory.
    ///
    /// # Errors
    ///
    /// Each renderer defines its own `Error` type for backend failures.
    fn render(&mut self, trajectory: &Trajectory) -> Result<(), Self::Error>;
}

/// Allows `&mut R` to be passed where a renderer is taken by value.
impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, trajectory: &Trajectory) -> Result<(), Self::Error> {
        (**self).render(trajectory)
    }
}
