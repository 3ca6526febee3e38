use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, VecDeque};
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

use super::{SEPARATOR, write_items};

/// Adjacency lists. Neighbours are visited in the order they are listed.
type Graph<N> = BTreeMap<N, Vec<N>>;

/// Adjacency lists with an edge weight per neighbour.
type WeightedGraph<N> = BTreeMap<N, Vec<(N, u32)>>;

fn neighbours<'a, N: Ord, E>(graph: &'a BTreeMap<N, Vec<E>>, node: &N) -> &'a [E] {
    graph.get(node).map_or(&[][..], Vec::as_slice)
}

/// Breadth first traversal from `start`, one layer of distance at a time. Nodes are marked as
/// visited when they are queued, so each one is queued at most once.
fn bfs<N: Ord + Copy>(graph: &Graph<N>, start: N) -> Vec<N> {
    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &next in neighbours(graph, &node) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    order
}

/// The path with the fewest edges from `from` to `to`, if `to` is reachable at all.
fn bfs_shortest_path<N: Ord + Copy>(graph: &Graph<N>, from: N, to: N) -> Option<Vec<N>> {
    if from == to {
        return Some(vec![from]);
    }

    let mut parents = BTreeMap::from([(from, None)]);
    let mut queue = VecDeque::from([from]);

    while let Some(node) = queue.pop_front() {
        for &next in neighbours(graph, &node) {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, Some(node));

            if next == to {
                let mut path = vec![to];
                let mut curr = to;
                while let Some(&Some(parent)) = parents.get(&curr) {
                    path.push(parent);
                    curr = parent;
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(next);
        }
    }
    None
}

/// Iterative depth first traversal. Neighbours are pushed in reverse so that they are popped in
/// the order they are listed, matching the recursive version.
fn dfs<N: Ord + Copy>(graph: &Graph<N>, start: N) -> Vec<N> {
    let mut visited = BTreeSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        stack.extend(
            neighbours(graph, &node)
                .iter()
                .rev()
                .filter(|next| !visited.contains(*next)),
        );
    }
    order
}

/// Shortest distance from `start` to every node in `graph`, [`None`] for unreachable nodes.
fn dijkstra<N: Ord + Copy>(graph: &WeightedGraph<N>, start: N) -> BTreeMap<N, Option<u32>> {
    let mut distances: BTreeMap<N, Option<u32>> = graph.keys().map(|&node| (node, None)).collect();
    distances.insert(start, Some(0));

    let mut queue = BinaryHeap::from([Reverse((0, start))]);

    while let Some(Reverse((distance, node))) = queue.pop() {
        // Stale entry, a shorter route was found after this one was queued.
        if distances.get(&node).copied().flatten().is_some_and(|best| distance > best) {
            continue;
        }

        for &(next, weight) in neighbours(graph, &node) {
            let candidate = distance + weight;
            let best = distances.entry(next).or_insert(None);
            if best.is_none_or(|best| candidate < best) {
                *best = Some(candidate);
                queue.push(Reverse((candidate, next)));
            }
        }
    }
    distances
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge<N> {
    from: N,
    to: N,
    weight: u32,
}

impl<N: Display> Display for Edge<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.from, self.to, self.weight)
    }
}

/// Lazy Prim's: grows a minimum spanning tree from `start` by repeatedly taking the lightest edge
/// that leaves the tree. Only the component containing `start` is spanned.
fn prims<N: Ord + Copy>(graph: &WeightedGraph<N>, start: N) -> (Vec<Edge<N>>, u32) {
    let mut edges = Vec::new();
    let mut total = 0;
    let mut visited = BTreeSet::from([start]);

    let mut queue: BinaryHeap<_> = neighbours(graph, &start)
        .iter()
        .map(|&(to, weight)| Reverse((weight, start, to)))
        .collect();

    while let Some(Reverse((weight, from, to))) = queue.pop() {
        if !visited.insert(to) {
            continue;
        }
        edges.push(Edge { from, to, weight });
        total += weight;

        queue.extend(
            neighbours(graph, &to)
                .iter()
                .filter(|(next, _)| !visited.contains(next))
                .map(|&(next, next_weight)| Reverse((next_weight, to, next))),
        );
    }
    (edges, total)
}

fn unweighted<N: Ord + Copy>(lists: &[(N, &[N])]) -> Graph<N> {
    lists.iter().map(|&(node, next)| (node, next.to_vec())).collect()
}

fn weighted<N: Ord + Copy>(lists: &[(N, &[(N, u32)])]) -> WeightedGraph<N> {
    lists.iter().map(|&(node, next)| (node, next.to_vec())).collect()
}

/// Graph algorithms built on the structures above: a queue for breadth first search, a stack for
/// depth first search and a min-heap for Dijkstra's and Prim's.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let graph = unweighted(&[
        ('A', &['B', 'C']),
        ('B', &['A', 'D', 'E']),
        ('C', &['A', 'F']),
        ('D', &['B']),
        ('E', &['B', 'F']),
        ('F', &['C', 'E']),
    ]);
    let disconnected = unweighted(&[
        ('1', &['2']),
        ('2', &['1', '3']),
        ('3', &['2']),
        ('4', &['5']),
        ('5', &['4']),
    ]);

    writeln!(out, "BFS")?;
    write_items(out, "Traversal starting from 'A': ", bfs(&graph, 'A'))?;
    write_items(
        out,
        "Traversal starting from '1' (disconnected graph): ",
        bfs(&disconnected, '1'),
    )?;
    match bfs_shortest_path(&graph, 'A', 'F') {
        Some(path) => write_items(out, "Shortest path from A to F: ", path)?,
        None => writeln!(out, "No path from A to F")?,
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "DFS")?;
    let tree = unweighted(&[
        ('A', &['B', 'C']),
        ('B', &['D', 'E']),
        ('C', &['F']),
        ('D', &[]),
        ('E', &['F']),
        ('F', &[]),
    ]);
    write_items(out, "Traversal starting from 'A': ", dfs(&tree, 'A'))?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "DIJKSTRA")?;
    let roads = weighted(&[
        ('A', &[('B', 4), ('C', 2)]),
        ('B', &[('C', 5), ('D', 10)]),
        ('C', &[('E', 3)]),
        ('D', &[('F', 11)]),
        ('E', &[('D', 4), ('F', 2)]),
        ('F', &[]),
    ]);
    write_items(
        out,
        "Shortest distances from 'A': ",
        dijkstra(&roads, 'A').into_iter().map(|(node, distance)| match distance {
            Some(distance) => format!("{node}={distance}"),
            None => format!("{node}=inf"),
        }),
    )?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "PRIM'S MINIMUM SPANNING TREE")?;
    let network = weighted(&[
        ('A', &[('B', 4), ('C', 2)]),
        ('B', &[('A', 4), ('D', 5)]),
        ('C', &[('A', 2), ('D', 8), ('E', 10)]),
        ('D', &[('B', 5), ('C', 8), ('E', 2)]),
        ('E', &[('C', 10), ('D', 2)]),
    ]);
    let (edges, total) = prims(&network, 'A');
    write_items(out, "Edges in MST: ", edges)?;
    writeln!(out, "Total weight of MST: {total}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::capture;

    #[test]
    fn test_output() {
        assert_eq!(
            capture(run),
            "BFS\n\
             Traversal starting from 'A': A B C D E F\n\
             Traversal starting from '1' (disconnected graph): 1 2 3\n\
             Shortest path from A to F: A C F\n\
             -------------------------------------------\n\
             DFS\n\
             Traversal starting from 'A': A B D E F C\n\
             -------------------------------------------\n\
             DIJKSTRA\n\
             Shortest distances from 'A': A=0 B=4 C=2 D=9 E=5 F=7\n\
             -------------------------------------------\n\
             PRIM'S MINIMUM SPANNING TREE\n\
             Edges in MST: A-C (2) A-B (4) B-D (5) D-E (2)\n\
             Total weight of MST: 13\n"
        );
    }

    #[test]
    fn test_shortest_path_edge_cases() {
        let graph = unweighted(&[(1, &[2]), (2, &[1]), (3, &[])]);

        assert_eq!(
            bfs_shortest_path(&graph, 1, 1),
            Some(vec![1]),
            "A node should reach itself without moving."
        );
        assert_eq!(bfs_shortest_path(&graph, 1, 2), Some(vec![1, 2]));
        assert_eq!(
            bfs_shortest_path(&graph, 1, 3),
            None,
            "An unreachable node should have no path."
        );
    }

    #[test]
    fn test_unreachable_and_missing_nodes() {
        let graph = weighted(&[(1, &[(2, 7)]), (2, &[]), (3, &[(1, 1)])]);
        let distances = dijkstra(&graph, 1);

        assert_eq!(distances.get(&2), Some(&Some(7)));
        assert_eq!(
            distances.get(&3),
            Some(&None),
            "Nodes that can't be reached should keep an infinite distance."
        );

        assert_eq!(bfs(&Graph::new(), 'x'), ['x'], "A start without neighbours visits only itself.");
        assert_eq!(dfs(&Graph::new(), 'x'), ['x']);
        assert_eq!(prims(&WeightedGraph::<char>::new(), 'x'), (Vec::new(), 0));
    }

    #[test]
    fn test_prims_spans_only_start_component() {
        let graph = weighted(&[
            (1, &[(2, 3)]),
            (2, &[(1, 3)]),
            (3, &[(4, 1)]),
            (4, &[(3, 1)]),
        ]);
        let (edges, total) = prims(&graph, 1);

        assert_eq!(edges, [Edge { from: 1, to: 2, weight: 3 }]);
        assert_eq!(total, 3);
    }
}
