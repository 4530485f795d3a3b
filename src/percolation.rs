/// Percolation model on an n-by-n grid of sites
///
/// Each site is either blocked or open. A full site is an open site connected
/// to the top row through a chain of open 4-neighbors; the system percolates
/// when an open path joins the top row to the bottom row.
///
/// Connectivity is tracked with two UnionFind instances over the linearized
/// sites plus virtual anchor nodes. The fullness instance carries only the
/// top anchor; the percolation instance carries both. Keeping the bottom
/// anchor out of the fullness instance prevents backwash: once the system
/// percolates, a bottom-row site with no path to the top would otherwise
/// read as full through the bottom anchor.
use anyhow::{bail, Result};

use crate::union_find::UnionFind;

#[derive(Debug)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    /// Sites + top anchor; answers is_full
    full_uf: UnionFind,
    /// Sites + both anchors; answers percolates
    perc_uf: UnionFind,
    top: usize,
    bottom: usize,
}

impl Percolation {
    /// Create an n-by-n grid with all sites blocked
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            bail!("grid dimension must be greater than 0");
        }
        let sites = n * n;
        Ok(Percolation {
            n,
            open: vec![false; sites],
            open_count: 0,
            full_uf: UnionFind::new(sites + 1),
            perc_uf: UnionFind::new(sites + 2),
            top: sites,
            bottom: sites + 1,
        })
    }

    /// Grid dimension
    pub fn size(&self) -> usize {
        self.n
    }

    /// Map a 1-indexed (row, col) pair to its linear site index
    fn site_index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row == 0 || row > self.n {
            bail!(
                "row index {} out of bounds for {}x{} grid",
                row,
                self.n,
                self.n
            );
        }
        if col == 0 || col > self.n {
            bail!(
                "col index {} out of bounds for {}x{} grid",
                col,
                self.n,
                self.n
            );
        }
        Ok(())
    }

    // Union the site with a neighbor in both instances.
    fn link(&mut self, site: usize, neighbor: usize) -> Result<()> {
        self.full_uf.union(site, neighbor)?;
        self.perc_uf.union(site, neighbor)?;
        Ok(())
    }

    /// Open site (row, col) if it is not open already
    ///
    /// Connects the site to each of its open 4-neighbors, and to the virtual
    /// anchors when it lies in the top or bottom row. Opening is monotonic;
    /// an already-open site is left unchanged.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;

        let site = self.site_index(row, col);
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_count += 1;

        if row > 1 && self.open[site - self.n] {
            self.link(site, site - self.n)?;
        }
        if row < self.n && self.open[site + self.n] {
            self.link(site, site + self.n)?;
        }
        if col > 1 && self.open[site - 1] {
            self.link(site, site - 1)?;
        }
        if col < self.n && self.open[site + 1] {
            self.link(site, site + 1)?;
        }

        if row == 1 {
            self.link(site, self.top)?;
        }
        if row == self.n {
            // Bottom anchor lives only in the percolation instance
            self.perc_uf.union(site, self.bottom)?;
        }

        Ok(())
    }

    /// Is site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.open[self.site_index(row, col)])
    }

    /// Is site (row, col) full, i.e. connected to the top row?
    ///
    /// Answered against the fullness instance so that percolation elsewhere
    /// never leaks in through the bottom anchor.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        let site = self.site_index(row, col);
        Ok(self.open[site] && self.full_uf.connected(site, self.top)?)
    }

    /// Number of open sites
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Does the system percolate?
    pub fn percolates(&mut self) -> bool {
        // Anchor indices are always in range
        self.perc_uf
            .connected(self.top, self.bottom)
            .unwrap_or(false)
    }
}
