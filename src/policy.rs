//! Buffer growth policies
//!
//! Lines are read into a buffer of fixed initial capacity (64 KiB by
//! default). If a line does not fit, the buffer grows according to a
//! [`BufPolicy`](BufPolicy).

/// Policy that decides how a buffer should grow
///
/// Takes the current buffer size in bytes and returns the new
/// size the the buffer should grow to. Returning `None` instead will indicate
/// that the buffer has grown too big. In this case, the readers
/// will return `ErrorKind::BufferLimit`.
///
/// # Example
///
/// ```no_run
/// use seqparser::policy::BufPolicy;
/// use seqparser::fasta;
///
/// #[derive(Clone)]
/// struct Max1G;
///
/// // This policy lets the buffer double each time, but
/// // limits the buffer size to 1 GiB. Note that this is similar to how
/// // `DoubleUntilLimited` works.
/// impl BufPolicy for Max1G {
///     fn grow_to(&mut self, current_size: usize) -> Option<usize> {
///         if current_size > 1 << 30 {
///             return None
///         }
///         Some(current_size * 2)
///     }
/// }
///
/// let parser = fasta::Parser::new("seqs.fasta").set_policy(Max1G);
///
/// for record in &parser {
///     println!("{}", record.unwrap().head);
/// }
/// ```
pub trait BufPolicy {
    fn grow_to(&mut self, current_size: usize) -> Option<usize>;
}

/// Standard buffer policy: This policy corresponds to
/// `DoubleUntil(8 * 1024 * 1024)`, meaning that buffer size
/// doubles until it reaches 8 MiB. Above, it will
/// increase in steps of 8 MiB. Buffer size is not limited.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPolicy;

impl BufPolicy for StdPolicy {
    fn grow_to(&mut self, current_size: usize) -> Option<usize> {
        DoubleUntil(1 << 23).grow_to(current_size)
    }
}

/// Buffer size doubles until it reaches a given limit
/// (in bytes). Above, it will increase linearly in
/// steps of 'limit'. Buffer size is not limited.
#[derive(Debug, Clone, Copy)]
pub struct DoubleUntil(pub usize);

impl BufPolicy for DoubleUntil {
    fn grow_to(&mut self, current_size: usize) -> Option<usize> {
        Some(if current_size < self.0 {
            current_size * 2
        } else {
            current_size + self.0
        })
    }
}

/// Buffer size doubles until it reaches `double_until` bytes, then grows
/// in steps of `double_until`. Growing beyond `limit` bytes is refused,
/// and the readers return `ErrorKind::BufferLimit`.
#[derive(Debug, Clone, Copy)]
pub struct DoubleUntilLimited {
    double_until: usize,
    limit: usize,
}

impl DoubleUntilLimited {
    pub fn new(double_until: usize, limit: usize) -> Self {
        DoubleUntilLimited {
            double_until,
            limit,
        }
    }
}

impl BufPolicy for DoubleUntilLimited {
    fn grow_to(&mut self, current_size: usize) -> Option<usize> {
        let new_size = DoubleUntil(self.double_until).grow_to(current_size)?;
        if new_size <= self.limit {
            Some(new_size)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_until() {
        let mut p = DoubleUntil(8);
        assert_eq!(p.grow_to(2), Some(4));
        assert_eq!(p.grow_to(8), Some(16));
        assert_eq!(p.grow_to(16), Some(24));
    }

    #[test]
    fn limited() {
        let mut p = DoubleUntilLimited::new(4, 10);
        assert_eq!(p.grow_to(2), Some(4));
        assert_eq!(p.grow_to(4), Some(8));
        assert_eq!(p.grow_to(8), None);
    }
}
