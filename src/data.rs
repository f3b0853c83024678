use anyhow::{bail, Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::golden::reference_forward;
use crate::kernel::fc::FcArgs;

const CASE_MAGIC: &[u8; 8] = b"QFCDAT01";

/// One dense-layer case: activations, row-major weights, and the golden
/// output the kernel result is verified against.
#[derive(Debug, Clone)]
pub struct FcCase {
    pub channels_in: usize,
    pub channels_out: usize,
    pub input: Vec<u8>,
    pub weights: Vec<i8>,
    pub golden: Vec<i32>,
}

impl FcCase {
    #[inline]
    pub fn args(&self) -> FcArgs<'_> {
        FcArgs::new(&self.input, &self.weights, self.channels_in, self.channels_out)
    }

    /// Seeded random case; golden output filled in with the scalar reference.
    pub fn random(channels_in: usize, channels_out: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let input: Vec<u8> = (0..channels_in).map(|_| rng.gen()).collect();
        let weights: Vec<i8> = (0..channels_in * channels_out).map(|_| rng.gen()).collect();
        let golden = reference_forward(&FcArgs::new(&input, &weights, channels_in, channels_out));
        Self { channels_in, channels_out, input, weights, golden }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Format:
        // magic: 8 bytes b"QFCDAT01"
        // u32 channels_in, u32 channels_out (LE)
        // u8  input[channels_in]
        // i8  weights[channels_out * channels_in]
        // i32 golden[channels_out] (LE)
        let f = File::open(&path)
            .with_context(|| format!("open case file: {}", path.as_ref().display()))?;
        let mut r = BufReader::new(f);
        let mut magic = [0u8; 8];
        r.read_exact(&mut magic).context("read magic")?;
        if &magic != CASE_MAGIC {
            bail!("bad case magic");
        }
        let mut b4 = [0u8; 4];
        r.read_exact(&mut b4).context("read channels_in")?;
        let channels_in = u32::from_le_bytes(b4) as usize;
        r.read_exact(&mut b4).context("read channels_out")?;
        let channels_out = u32::from_le_bytes(b4) as usize;

        let mut input = vec![0u8; channels_in];
        r.read_exact(&mut input).context("read input")?;

        let mut weight_bytes = vec![0u8; channels_out * channels_in];
        r.read_exact(&mut weight_bytes).context("read weights")?;
        let weights: Vec<i8> = weight_bytes.into_iter().map(|b| b as i8).collect();

        let mut golden_bytes = vec![0u8; channels_out * 4];
        r.read_exact(&mut golden_bytes).context("read golden")?;
        let mut golden = Vec::with_capacity(channels_out);
        for chunk in golden_bytes.chunks_exact(4) {
            golden.push(i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        Ok(Self { channels_in, channels_out, input, weights, golden })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let f = File::create(&path)
            .with_context(|| format!("create case file: {}", path.as_ref().display()))?;
        let mut w = BufWriter::new(f);
        w.write_all(CASE_MAGIC).context("write magic")?;
        w.write_all(&(self.channels_in as u32).to_le_bytes()).context("write channels_in")?;
        w.write_all(&(self.channels_out as u32).to_le_bytes()).context("write channels_out")?;
        w.write_all(&self.input).context("write input")?;
        let weight_bytes: Vec<u8> = self.weights.iter().map(|&v| v as u8).collect();
        w.write_all(&weight_bytes).context("write weights")?;
        for v in &self.golden {
            w.write_all(&v.to_le_bytes()).context("write golden")?;
        }
        w.flush().context("flush case file")?;
        Ok(())
    }
}
