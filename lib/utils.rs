//! Small output helpers for scripts built on this crate.
//!
//! Both macros use `?` internally and so must be called from a function
//! returning a `Result` whose error type can absorb [`std::io::Error`] and
//! [`ndarray_npy::WriteNpzError`], e.g. `anyhow::Result`.

/// Create a directory and all of its parents if it doesn't already exist.
#[macro_export]
macro_rules! mkdir {
    ( $dir:expr ) => {
        {
            let _dir_: &std::path::Path = $dir.as_ref();
            if !_dir_.is_dir() {
                std::fs::create_dir_all(_dir_)?;
            }
        }
    }
}

/// Write a collection of named arrays to a single `.npz` file.
///
/// ```ignore
/// write_npz!(
///     outdir.join("data.npz"),
///     arrays: {
///         "B" => &field,
///         "nu" => &freq,
///     }
/// );
/// ```
#[macro_export]
macro_rules! write_npz {
    (
        $filename:expr,
        arrays: { $( $name:expr => $arr:expr ),+ $(,)? }
    ) => {
        {
            let _file_ = std::fs::File::create($filename)?;
            let mut _npz_ = $crate::ndarray_npy::NpzWriter::new(_file_);
            $(
                _npz_.add_array($name, $arr)?;
            )+
            _npz_.finish()?;
        }
    }
}

#[cfg(test)]
mod test {
    use ndarray as nd;

    fn write(dir: &std::path::Path) -> anyhow::Result<()> {
        let outdir = dir.join("nested");
        mkdir!(outdir);
        mkdir!(outdir);
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 3);
        let y: nd::Array2<f64> = nd::Array2::zeros((2, 3));
        write_npz!(
            outdir.join("test.npz"),
            arrays: {
                "x" => &x,
                "y" => &y,
            }
        );
        Ok(())
    }

    #[test]
    fn writes_npz() {
        let dir = std::env::temp_dir()
            .join(format!("atomic-zeeman-utils-{}", std::process::id()));
        write(&dir).unwrap();
        assert!(dir.join("nested").join("test.npz").is_file());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
