// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::path::PathBuf;

use anyhow::Result;
use cotizador_app::{QuoteSession, Totals};
use cotizador_pdf::{Logos, render_quote};
use cotizador_tui::{AppRuntime, GeneratedQuote};

/// Generation pipeline behind the TUI: validate, price, load logos, render,
/// and only then advance the folio counter. Every failure is recorded in the
/// session log before it propagates to the status line.
pub struct PdfRuntime {
    out_dir: PathBuf,
    logo_paths: Option<(PathBuf, PathBuf)>,
}

impl PdfRuntime {
    pub fn new(out_dir: PathBuf, logo_paths: Option<(PathBuf, PathBuf)>) -> Self {
        Self {
            out_dir,
            logo_paths,
        }
    }
}

impl AppRuntime for PdfRuntime {
    fn generate(&mut self, session: &mut QuoteSession) -> Result<GeneratedQuote> {
        session.log.append("PDF generation started");

        if let Err(error) = session.form.validate() {
            session.log.append_error(format!("validation failed: {error}"));
            return Err(error);
        }

        let totals = Totals::from_form(&session.form);

        // Both logos must decode before any drawing starts.
        let logos = match &self.logo_paths {
            Some((primary, secondary)) => match Logos::load(primary, secondary) {
                Ok(logos) => Some(logos),
                Err(error) => {
                    session.log.append_error(format!("{error:#}"));
                    return Err(error);
                }
            },
            None => None,
        };

        let folio = session.folio();
        let path = match render_quote(&session.form, &folio, &totals, logos.as_ref(), &self.out_dir)
        {
            Ok(path) => path,
            Err(error) => {
                session.log.append_error(format!("{error:#}"));
                return Err(error);
            }
        };

        // The folio sequence only advances once the file is on disk.
        session.counter.bump();
        session
            .log
            .append(format!("PDF saved: {} ({folio})", path.display()));
        Ok(GeneratedQuote { path, folio })
    }
}

#[cfg(test)]
mod tests {
    use super::PdfRuntime;
    use anyhow::Result;
    use cotizador_app::{LogSeverity, QuoteSession};
    use cotizador_tui::AppRuntime;

    fn session_with(client: &str, price: &str) -> QuoteSession {
        let mut session = QuoteSession::new(7309);
        session.form.client = client.to_owned();
        session.form.price = price.to_owned();
        session
    }

    #[test]
    fn successful_generation_saves_then_bumps_counter() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let mut runtime = PdfRuntime::new(temp.path().to_path_buf(), None);
        let mut session = session_with("Acme SA", "500000");
        session.form.discount = "20000".to_owned();

        let generated = runtime.generate(&mut session)?;
        assert_eq!(generated.folio, "TM3/FTNLN/07309");
        assert!(generated.path.exists());
        assert_eq!(session.counter.get(), 7310);
        assert!(
            session
                .log
                .entries()
                .iter()
                .any(|entry| entry.message.contains("PDF saved"))
        );
        Ok(())
    }

    #[test]
    fn validation_failure_leaves_counter_and_disk_untouched() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let mut runtime = PdfRuntime::new(temp.path().to_path_buf(), None);
        let mut session = session_with("Acme SA", "");

        let error = runtime
            .generate(&mut session)
            .expect_err("blank price must fail validation");
        assert!(error.to_string().contains("price"));
        assert_eq!(session.counter.get(), 7309);
        assert!(std::fs::read_dir(temp.path())?.next().is_none());
        assert!(
            session
                .log
                .entries()
                .iter()
                .any(|entry| entry.severity == LogSeverity::Error)
        );
        Ok(())
    }

    #[test]
    fn missing_logo_aborts_before_rendering() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let primary = temp.path().join("logo.png");
        image::RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0])).save(&primary)?;
        let missing = temp.path().join("logo2.png");

        let out_dir = temp.path().join("out");
        let mut runtime = PdfRuntime::new(out_dir.clone(), Some((primary, missing)));
        let mut session = session_with("Acme SA", "500000");

        let error = runtime
            .generate(&mut session)
            .expect_err("missing secondary logo must abort");
        assert!(error.to_string().contains("secondary logo"));
        assert_eq!(session.counter.get(), 7309);
        assert!(!out_dir.exists());
        Ok(())
    }

    #[test]
    fn each_successful_generation_advances_the_folio_once() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let mut runtime = PdfRuntime::new(temp.path().to_path_buf(), None);
        let mut session = session_with("Acme SA", "500000");

        runtime.generate(&mut session)?;
        runtime.generate(&mut session)?;
        assert_eq!(session.counter.get(), 7311);
        assert_eq!(session.folio(), "TM3/FTNLN/07311");
        Ok(())
    }
}
