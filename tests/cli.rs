use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn kmerid(args: &[&str], stdin: Option<&[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kmerid"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(data) = stdin {
            pipe.write_all(data).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn test_refset_then_intersect() {
    let dir = TempDir::new().unwrap();
    let fasta = dir.path().join("ref.fa");
    std::fs::write(&fasta, ">chr\nACGT\n>plasmid\nNACGT\n").unwrap();
    let ref_list = dir.path().join("ref_kmers.txt");

    let out = kmerid(
        &["-q", "refset", "-k", "2", path_str(&fasta), "-o", path_str(&ref_list)],
        None,
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    // ACGTNACGT: AC/GT -> 1, CG -> 6, TN and NA skipped
    assert_eq!(std::fs::read_to_string(&ref_list).unwrap(), "1\n6\n");

    // Raw reads on stdin, every k-mer kept
    let out = kmerid(&["-q", "reads", "-k", "2", "--min-count", "1"], Some(&b"acg\nttt\n"[..]));
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "0\n1\n6\n");

    let read_list = dir.path().join("reads_kmers.txt");
    std::fs::write(&read_list, "0\n1\n6\n").unwrap();
    let out = kmerid(&["-q", "intersect", path_str(&read_list), path_str(&ref_list)], None);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, format!("100.000000\t0.000000\t{}\n", path_str(&ref_list)));
}

#[test]
fn test_jaccard_output() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "1\n2\n3\n5\n").unwrap();
    std::fs::write(&b, "2\n3\n4").unwrap();

    let out = kmerid(&["-q", "jaccard", path_str(&a), path_str(&b)], None);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, format!("0.400000\t{}\t{}\n", path_str(&a), path_str(&b)));

    let out = kmerid(&["-q", "jaccard", path_str(&a), path_str(&b), "--format", "json"], None);
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["intersection"], 2);
    assert_eq!(json["union"], 5);
}

#[test]
fn test_fatal_errors_exit_nonzero() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let unsorted = dir.path().join("unsorted.txt");
    std::fs::write(&unsorted, "5\n1\n").unwrap();

    let out = kmerid(&["intersect", path_str(&missing), path_str(&missing)], None);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.txt"));

    let out = kmerid(&["jaccard", path_str(&unsorted), path_str(&unsorted)], None);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not sorted"));

    let out = kmerid(&["reads", "-k", "0"], Some(&b"ACGT\n"[..]));
    assert!(!out.status.success());

    // Missing reference argument is a usage error
    let out = kmerid(&["intersect", path_str(&unsorted)], None);
    assert!(!out.status.success());
}

#[test]
fn test_reads_fastq_keeps_solid_kmers() {
    // AC, CG, GT seen in both records; GG/CC and GC only once
    let fastq: &[u8] = b"@r1\nACGT\n+\nIIII\n@r2\nACGT\n+\nIIII\n@r3\nGGC\n+\nIII\n";
    let out = kmerid(&["-q", "reads", "-k", "2", "--fastq"], Some(fastq));
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n6\n");

    let out = kmerid(
        &["-q", "reads", "-k", "2", "--fastq", "--min-count", "1"],
        Some(fastq),
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n5\n6\n9\n");
}

#[test]
fn test_reads_tolerate_non_utf8_bytes() {
    let out = kmerid(
        &["-q", "reads", "-k", "2", "--min-count", "1"],
        Some(&b"ACGT\xe9ACGT\n"[..]),
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n6\n");

    let dir = TempDir::new().unwrap();
    let fasta = dir.path().join("ref.fa");
    std::fs::write(&fasta, b">ref \xe9\nAC\xffGT\n").unwrap();
    let out = kmerid(&["-q", "refset", "-k", "2", path_str(&fasta)], None);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n");
}

#[test]
fn test_matrix_output() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a_kmers.txt");
    let b = dir.path().join("b_kmers.txt");
    let c = dir.path().join("c_kmers.txt");
    std::fs::write(&a, "1\n2\n3\n5\n").unwrap();
    std::fs::write(&b, "2\n3\n4\n").unwrap();
    std::fs::write(&c, "").unwrap();

    let tsv = dir.path().join("matrix.tsv");
    let out = kmerid(
        &["-q", "matrix", path_str(&a), path_str(&b), path_str(&c), "-o", path_str(&tsv)],
        None,
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        std::fs::read_to_string(&tsv).unwrap(),
        "\ta\tb\tc\n\
         a\t1.000000\t0.400000\t0.000000\n\
         b\t0.400000\t1.000000\t0.000000\n\
         c\t0.000000\t0.000000\t0.000000\n"
    );

    let out = kmerid(&["-q", "matrix", path_str(&a), path_str(&b), "--format", "json"], None);
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["names"], serde_json::json!(["a", "b"]));
    assert_eq!(json["values"][0][1], 0.4);

    // A single list is a usage error
    let out = kmerid(&["matrix", path_str(&a)], None);
    assert!(!out.status.success());
}

#[test]
fn test_identify_output() {
    let dir = TempDir::new().unwrap();
    let query = dir.path().join("query.txt");
    let a = dir.path().join("a_kmers.txt");
    let b = dir.path().join("b_kmers.txt");
    let c = dir.path().join("c_kmers.txt");
    std::fs::write(&query, "1\n2\n3\n4\n20\n21\n").unwrap();
    std::fs::write(&a, "1\n2\n3\n4\n").unwrap();
    std::fs::write(&b, "1\n2\n3\n4\n5\n6\n7\n8\n").unwrap();
    std::fs::write(&c, "20\n21\n22\n23\n").unwrap();
    let (a, b, c) = (path_str(&a), path_str(&b), path_str(&c));

    let out = kmerid(&["-q", "identify", path_str(&query), b, a, c], None);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let expected = format!(
        "#similarity\tdistance\tfile\n\
         100.000000\t0.000000\t{a}\n\
         50.000000\t50.000000\t{b}\n\
         50.000000\t50.000000\t{c}\n\
         \n\
         #mixing analysis against top hit {a}\n\
         #abs_diff\tsim(query,file)-sim(top_hit,file)\tfile\n\
         50.000000\t50.000000\t{c}\n\
         0.000000\t0.000000\t{b}\n"
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), expected);

    let out = kmerid(
        &["-q", "identify", path_str(&query), b, a, c, "--top", "1", "--no-mix"],
        None,
    );
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("#similarity\tdistance\tfile\n100.000000\t0.000000\t{a}\n")
    );

    let out = kmerid(
        &["-q", "identify", path_str(&query), b, a, "--format", "json"],
        None,
    );
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["top_hit"], a);
    assert_eq!(json["mixing"][0]["difference"], 0.0);
}
