use crate::application::dto::{DepthRequest, DepthResponse};
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::{DependencyResolver, OutputPresenter, ProgressReporter};
use crate::shared::error::DepthError;
use crate::shared::Result;

/// AnalyzeDependenciesUseCase - Resolves and prints each requested root package
///
/// Roots are processed strictly in request order. The first root that fails
/// to resolve is reported as a FATAL line on the output presenter and ends
/// the run; later roots are not attempted.
///
/// # Type Parameters
/// * `R` - DependencyResolver implementation
/// * `P` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<R, P, PR> {
    resolver: R,
    presenter: P,
    progress_reporter: PR,
}

impl<R, P, PR> AnalyzeDependenciesUseCase<R, P, PR>
where
    R: DependencyResolver,
    P: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(resolver: R, presenter: P, progress_reporter: PR) -> Self {
        Self {
            resolver,
            presenter,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Returns
    /// The list of packages that were printed
    ///
    /// # Errors
    /// - `DepthError::ResolutionFailure` when a root cannot be resolved
    ///   (already written to the presenter)
    /// - any error from formatting or presenting output
    pub fn execute(&self, request: DepthRequest) -> Result<DepthResponse> {
        if request.packages.is_empty() {
            self.progress_reporter
                .report_error("No packages specified; nothing to analyze.");
            return Ok(DepthResponse::default());
        }

        let formatter = FormatterFactory::create(request.format);
        let total = request.packages.len();
        let mut analyzed = Vec::with_capacity(total);

        for (position, package) in request.packages.iter().enumerate() {
            self.progress_reporter.report_progress(
                position + 1,
                total,
                Some(&format!("Resolving '{}'", package)),
            );

            let root = match self.resolver.resolve(package, &request.options) {
                Ok(root) => root,
                Err(e) => return Err(self.fail(package, &e)),
            };

            let output = formatter.format(&root)?;
            self.presenter.present(&output)?;
            analyzed.push(package.clone());
        }

        self.progress_reporter.report_completion(&format!(
            "Analyzed {} package(s) as {}",
            analyzed.len(),
            request.format
        ));
        Ok(DepthResponse::new(analyzed))
    }

    /// Writes the FATAL line for `package` and builds the error ending the run
    fn fail(&self, package: &str, cause: &anyhow::Error) -> anyhow::Error {
        let failure = DepthError::ResolutionFailure {
            package: package.to_string(),
            details: cause.to_string(),
        };
        if let Err(write_error) = self.presenter.present(&format!("{}\n", failure)) {
            return write_error;
        }
        failure.into()
    }
}
