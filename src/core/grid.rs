use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }
}

/// Square two-dimensional array that stores values and allows to mutate them.
/// The dimension is chosen at construction and stays fixed afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid<T> {
    size: usize,
    contents: Vec<T>,
}

impl<T: Default> Grid<T> {
    /// Creates a `size`×`size` grid filled with default values.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            contents: std::iter::repeat_with(T::default)
                .take(size * size)
                .collect(),
        }
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[\n")?;
        for row in self.rows() {
            f.write_str("[")?;
            for val in row {
                write!(f, "{}", val)?;
            }
            f.write_str("]\n")?;
        }
        f.write_str("]")
    }
}

impl<T> Index<GridIndex> for Grid<T> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        self.assert_in_bounds(index);
        &self.contents[index.row() * self.size + index.col()]
    }
}

impl<T> IndexMut<GridIndex> for Grid<T> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        self.assert_in_bounds(index);
        &mut self.contents[index.row() * self.size + index.col()]
    }
}

impl<T> Grid<T> {
    /// Returns the dimension of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns an iterator over grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.contents.chunks(self.size)
    }

    /// Returns an iterator to indexed grid elements row by row.
    pub fn all_indexed(&self) -> impl Iterator<Item = (GridIndex, &T)> {
        self.contents
            .iter()
            .enumerate()
            .map(|(i, val)| (GridIndex::new(i / self.size, i % self.size), val))
    }

    // callers are internal and trusted, out of range access is a contract violation
    fn assert_in_bounds(&self, index: GridIndex) {
        assert!(
            index.row() < self.size && index.col() < self.size,
            "grid index {} is out of bounds for size {}",
            index,
            self.size
        );
    }
}
