/// Whitespace-delimited tokens of one title plus a claimed flag per index.
///
/// Tokens are never removed or reordered. Extractors see only unclaimed
/// tokens and mark what they take, so a token can feed at most one field.
#[derive(Debug, Clone)]
pub struct TokenPool<'a> {
    tokens: Vec<&'a str>,
    claimed: Vec<bool>,
}

impl<'a> TokenPool<'a> {
    pub fn new(title: &'a str) -> Self {
        let tokens: Vec<&str> = title.split_whitespace().collect();
        let claimed = vec![false; tokens.len()];
        TokenPool { tokens, claimed }
    }

    /// Token at an absolute index, if it is still unclaimed.
    pub fn get(&self, idx: usize) -> Option<&'a str> {
        match self.claimed.get(idx) {
            Some(false) => Some(self.tokens[idx]),
            _ => None,
        }
    }

    /// Unclaimed tokens in title order, with their absolute indices.
    pub fn unclaimed(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.tokens
            .iter()
            .zip(&self.claimed)
            .enumerate()
            .filter(|(_, (_, claimed))| !**claimed)
            .map(|(i, (tok, _))| (i, *tok))
    }

    pub fn unclaimed_count(&self) -> usize {
        self.claimed.iter().filter(|c| !**c).count()
    }

    /// First unclaimed index at or after `from` whose token satisfies `f`.
    pub fn position_from<F>(&self, from: usize, f: F) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.unclaimed()
            .find(|(i, tok)| *i >= from && f(*tok))
            .map(|(i, _)| i)
    }

    pub fn position<F>(&self, f: F) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.position_from(0, f)
    }

    pub fn claim(&mut self, idx: usize) -> Option<&'a str> {
        let tok = self.get(idx)?;
        self.claimed[idx] = true;
        Some(tok)
    }

    /// Claim every unclaimed token in `start..=end`, returning them in order.
    pub fn claim_through(&mut self, start: usize, end: usize) -> Vec<&'a str> {
        let mut taken = Vec::new();
        for idx in start..=end.min(self.tokens.len().saturating_sub(1)) {
            if let Some(tok) = self.claim(idx) {
                taken.push(tok);
            }
        }
        taken
    }

    pub fn take_first_matching<F>(&mut self, f: F) -> Option<&'a str>
    where
        F: Fn(&str) -> bool,
    {
        let idx = self.position(f)?;
        self.claim(idx)
    }

    /// Claim every unclaimed token satisfying `f`, returning them in order.
    pub fn take_all_matching<F>(&mut self, f: F) -> Vec<&'a str>
    where
        F: Fn(&str) -> bool,
    {
        let hits: Vec<usize> = self
            .unclaimed()
            .filter(|(_, tok)| f(*tok))
            .map(|(i, _)| i)
            .collect();
        hits.into_iter().filter_map(|i| self.claim(i)).collect()
    }

    /// Claim everything still unclaimed, returning it in order.
    pub fn drain_unclaimed(&mut self) -> Vec<&'a str> {
        let rest: Vec<usize> = self.unclaimed().map(|(i, _)| i).collect();
        rest.into_iter().filter_map(|i| self.claim(i)).collect()
    }
}
