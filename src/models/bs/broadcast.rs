//! Element-wise Black-Scholes evaluation over slices.
//!
//! The scalar-or-array polymorphism of dynamic pricing stacks maps onto an
//! explicit overload pair here: the scalar functions in the parent module
//! plus the slice versions below.  Broadcasting contract: every input
//! slice has either the common length `n` or length 1, in which case its
//! single value is broadcast across all `n` elements.  Anything else is
//! rejected before any element is evaluated.

use anyhow::{anyhow, Result};

use super::{bs_call_price, bs_put_price};

/// Resolve the common broadcast length of the six input slices.
fn broadcast_len(lens: [usize; 6]) -> Result<usize> {
    let mut n = 1;
    for &len in &lens {
        if len == 0 {
            return Err(anyhow!("Empty input slice in element-wise pricing"));
        }
        if len != 1 {
            if n != 1 && len != n {
                return Err(anyhow!(
                    "Incompatible input lengths for element-wise pricing: {:?}",
                    lens
                ));
            }
            n = len;
        }
    }
    Ok(n)
}

#[inline]
fn at(xs: &[f64], i: usize) -> f64 {
    if xs.len() == 1 {
        xs[0]
    } else {
        xs[i]
    }
}

/// Element-wise [`bs_call_price`] over slices with scalar broadcasting.
///
/// Element `i` of the output equals the scalar pricer applied to element
/// `i` of each input (a length-1 input contributes its single value to
/// every element).  Length mismatches other than 1 vs the common length
/// are reported as errors.
#[allow(non_snake_case)]
pub fn bs_call_price_slice(
    S: &[f64],
    K: &[f64],
    r: &[f64],
    sigma: &[f64],
    q: &[f64],
    T: &[f64],
) -> Result<Vec<f64>> {
    let n = broadcast_len([S.len(), K.len(), r.len(), sigma.len(), q.len(), T.len()])?;
    Ok((0..n)
        .map(|i| bs_call_price(at(S, i), at(K, i), at(r, i), at(sigma, i), at(q, i), at(T, i)))
        .collect())
}

/// Element-wise [`bs_put_price`] over slices with scalar broadcasting.
///
/// Same broadcasting contract as [`bs_call_price_slice`].
#[allow(non_snake_case)]
pub fn bs_put_price_slice(
    S: &[f64],
    K: &[f64],
    r: &[f64],
    sigma: &[f64],
    q: &[f64],
    T: &[f64],
) -> Result<Vec<f64>> {
    let n = broadcast_len([S.len(), K.len(), r.len(), sigma.len(), q.len(), T.len()])?;
    Ok((0..n)
        .map(|i| bs_put_price(at(S, i), at(K, i), at(r, i), at(sigma, i), at(q, i), at(T, i)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_matches_scalar_calls() {
        let s = [90.0, 100.0, 110.0, 120.0];
        let k = [100.0, 100.0, 100.0, 100.0];
        let r = [0.02, 0.02, 0.02, 0.02];
        let sigma = [0.25, 0.25, 0.0, 0.25];
        let q = [0.0, 0.01, 0.0, 0.0];
        let t = [0.5, 1.0, 1.0, 2.0];

        let calls = bs_call_price_slice(&s, &k, &r, &sigma, &q, &t).unwrap();
        let puts = bs_put_price_slice(&s, &k, &r, &sigma, &q, &t).unwrap();
        assert_eq!(calls.len(), 4);

        for i in 0..4 {
            let c = bs_call_price(s[i], k[i], r[i], sigma[i], q[i], t[i]);
            let p = bs_put_price(s[i], k[i], r[i], sigma[i], q[i], t[i]);
            assert_eq!(calls[i].to_bits(), c.to_bits(), "call mismatch at {}", i);
            assert_eq!(puts[i].to_bits(), p.to_bits(), "put mismatch at {}", i);
        }
    }

    #[test]
    fn test_length_one_inputs_broadcast() {
        let strikes = [80.0, 90.0, 100.0, 110.0, 120.0];
        let prices =
            bs_call_price_slice(&[100.0], &strikes, &[0.02], &[0.2], &[0.0], &[1.0]).unwrap();

        assert_eq!(prices.len(), strikes.len());
        for (i, &k) in strikes.iter().enumerate() {
            let expected = bs_call_price(100.0, k, 0.02, 0.2, 0.0, 1.0);
            assert_eq!(prices[i].to_bits(), expected.to_bits());
        }

        // All scalars: a single-element result
        let single = bs_put_price_slice(&[100.0], &[100.0], &[0.0], &[0.2], &[0.0], &[1.0]).unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_incompatible_lengths_are_rejected() {
        let err = bs_call_price_slice(
            &[100.0, 100.0],
            &[90.0, 100.0, 110.0],
            &[0.0],
            &[0.2],
            &[0.0],
            &[1.0],
        );
        assert!(err.is_err());

        let empty = bs_put_price_slice(&[], &[100.0], &[0.0], &[0.2], &[0.0], &[1.0]);
        assert!(empty.is_err());
    }
}
