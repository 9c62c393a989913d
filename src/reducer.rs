//! Pure state-transition functions.

use core::fmt;

/// A pure function from the previous model to the next one.
///
/// Reducers are the only way the runtime's model changes. Each carries a
/// short name used when tracing the reducer stream.
///
/// # Example
///
/// ```rust
/// use counter_clock::Reducer;
///
/// let double = Reducer::named("double", |n: &i32| n * 2);
/// assert_eq!(double.apply(&21), 42);
/// assert_eq!(double.name(), "double");
/// ```
#[allow(clippy::type_complexity)]
pub struct Reducer<Model> {
    name: &'static str,
    apply: Box<dyn Fn(&Model) -> Model + Send + 'static>,
}

impl<Model> Reducer<Model> {
    /// Create a reducer with a name for diagnostics.
    pub fn named<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(&Model) -> Model + Send + 'static,
    {
        Self {
            name,
            apply: Box::new(f),
        }
    }

    /// Produce the next model from `prev`.
    pub fn apply(&self, prev: &Model) -> Model {
        (self.apply)(prev)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<Model> fmt::Debug for Reducer<Model> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reducer").field(&self.name).finish()
    }
}

/// Apply `reducers` in order, starting from `start`.
///
/// This is the same fold the runtime performs, without rendering.
pub fn fold<'a, Model, I>(start: Model, reducers: I) -> Model
where
    Model: 'a,
    I: IntoIterator<Item = &'a Reducer<Model>>,
{
    reducers
        .into_iter()
        .fold(start, |model, reducer| reducer.apply(&model))
}
