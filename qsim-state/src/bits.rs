//! Conversão entre índices de base e listas de bits (MSB primeiro)

/// Expansão binária de `value` em `n` bits, bit mais significativo primeiro
pub fn index_to_bits(value: usize, n: usize) -> Vec<u8> {
    (0..n)
        .rev()
        .map(|shift| {
            if shift < usize::BITS as usize {
                ((value >> shift) & 1) as u8
            } else {
                0
            }
        })
        .collect()
}

/// Inteiro representado por uma lista de bits (MSB primeiro)
pub fn bits_to_index(bits: &[u8]) -> usize {
    bits.iter()
        .fold(0, |acc, &bit| (acc << 1) | usize::from(bit != 0))
}
