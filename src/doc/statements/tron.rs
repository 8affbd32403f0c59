/*!
# `TRON | TROFF`

## Purpose
Turn line tracing on and off.

## Remarks
While tracing, each line number is printed in brackets as execution
enters the line. Jumping into the middle of a line prints nothing.
`NEW` turns tracing off.

## Example
```text
10 A=1
20 TRON:A=A+1
30 IF A<3 THEN 20
40 TROFF:PRINT A
RUN
[30][20][30][40]3
```

*/
