/*!
# `RUN [<line number>]`

## Purpose
Clear variables and start the program.

## Remarks
Omitting the line number starts at the first line.
`FOR` loops, pending `GOSUB`s and the `DATA` pointer are reset.
With no program in memory `NO PROGRAM.` is printed.

## Example
```text
10 PRINT "FIRST"
20 PRINT "SECOND"
RUN 20
SECOND
```

*/
